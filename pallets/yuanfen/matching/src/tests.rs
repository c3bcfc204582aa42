//! 合婚模块测试

use crate::mock::*;
use crate::{Error, Event, Reports, ReportOfRequest, Requests};
use frame_support::{assert_noop, assert_ok};
use pallet_yuanfen_common::types::{CompatLevel, MatchStatus};

fn setup_pair() -> (u64, u64) {
    let alice_chart = create_chart_for(ALICE, 1990, 1, 1);
    let bob_chart = create_chart_for(BOB, 1990, 1, 2);
    (alice_chart, bob_chart)
}

#[test]
fn request_match_creates_pending_request() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();

        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));

        let request = Requests::<Test>::get(0).unwrap();
        assert_eq!(request.requester, ALICE);
        assert_eq!(request.target, BOB);
        assert_eq!(request.status, MatchStatus::PendingAuthorization);
        assert_eq!(request.created_at, 1);
        assert_eq!(request.expires_at, 101);

        assert_eq!(Matching::requests_by_requester(ALICE).to_vec(), vec![0]);
        assert_eq!(Matching::requests_by_target(BOB).to_vec(), vec![0]);

        System::assert_last_event(
            Event::MatchRequested { request_id: 0, requester: ALICE, target: BOB }.into(),
        );
    });
}

#[test]
fn request_match_validates_charts_and_parties() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();

        assert_noop!(
            Matching::request_match(RuntimeOrigin::signed(ALICE), alice_chart, ALICE, alice_chart),
            Error::<Test>::SelfMatchNotAllowed
        );
        assert_noop!(
            Matching::request_match(RuntimeOrigin::signed(ALICE), 99, BOB, bob_chart),
            Error::<Test>::ChartNotFound
        );
        assert_noop!(
            Matching::request_match(RuntimeOrigin::signed(ALICE), alice_chart, BOB, 99),
            Error::<Test>::ChartNotFound
        );
        // 用他人命盘发起
        assert_noop!(
            Matching::request_match(RuntimeOrigin::signed(CHARLIE), alice_chart, BOB, bob_chart),
            Error::<Test>::NotChartOwner
        );
        // 对方命盘归属不符
        assert_noop!(
            Matching::request_match(RuntimeOrigin::signed(ALICE), alice_chart, CHARLIE, bob_chart),
            Error::<Test>::NotChartOwner
        );
    });
}

#[test]
fn authorize_match_flow() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));

        // 仅对方可授权
        assert_noop!(
            Matching::authorize_match(RuntimeOrigin::signed(ALICE), 0),
            Error::<Test>::NotParticipant
        );
        assert_noop!(
            Matching::authorize_match(RuntimeOrigin::signed(BOB), 42),
            Error::<Test>::RequestNotFound
        );

        assert_ok!(Matching::authorize_match(RuntimeOrigin::signed(BOB), 0));
        assert_eq!(Requests::<Test>::get(0).unwrap().status, MatchStatus::Authorized);
        System::assert_last_event(Event::MatchAuthorized { request_id: 0 }.into());

        // 重复授权被拒
        assert_noop!(
            Matching::authorize_match(RuntimeOrigin::signed(BOB), 0),
            Error::<Test>::InvalidStatus
        );
    });
}

#[test]
fn authorize_match_fails_after_expiration() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));

        // 截止区块当口仍可授权
        System::set_block_number(101);
        assert_ok!(Matching::authorize_match(RuntimeOrigin::signed(BOB), 0));

        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));
        System::set_block_number(202);
        assert_noop!(
            Matching::authorize_match(RuntimeOrigin::signed(BOB), 1),
            Error::<Test>::RequestExpired
        );
    });
}

#[test]
fn reject_match_flow() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));

        assert_noop!(
            Matching::reject_match(RuntimeOrigin::signed(ALICE), 0),
            Error::<Test>::NotParticipant
        );
        assert_ok!(Matching::reject_match(RuntimeOrigin::signed(BOB), 0));
        assert_eq!(Requests::<Test>::get(0).unwrap().status, MatchStatus::Rejected);
        System::assert_last_event(Event::MatchRejected { request_id: 0 }.into());

        // 拒绝后不能再授权
        assert_noop!(
            Matching::authorize_match(RuntimeOrigin::signed(BOB), 0),
            Error::<Test>::InvalidStatus
        );
    });
}

#[test]
fn cancel_match_flow() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));

        // 仅发起方可取消
        assert_noop!(
            Matching::cancel_match(RuntimeOrigin::signed(BOB), 0),
            Error::<Test>::NotParticipant
        );
        assert_ok!(Matching::cancel_match(RuntimeOrigin::signed(ALICE), 0));
        assert_eq!(Requests::<Test>::get(0).unwrap().status, MatchStatus::Cancelled);

        // 已授权的请求在报告生成前同样可取消
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));
        assert_ok!(Matching::authorize_match(RuntimeOrigin::signed(BOB), 1));
        assert_ok!(Matching::cancel_match(RuntimeOrigin::signed(ALICE), 1));
        assert_eq!(Requests::<Test>::get(1).unwrap().status, MatchStatus::Cancelled);
    });
}

#[test]
fn generate_report_stores_result() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));
        assert_ok!(Matching::authorize_match(RuntimeOrigin::signed(BOB), 0));
        assert_ok!(Matching::generate_report(RuntimeOrigin::signed(ALICE), 0));

        let report = Reports::<Test>::get(0).unwrap();
        assert_eq!(report.request_id, 0);
        assert_eq!(report.algorithm_version, crate::ALGORITHM_VERSION);
        // 1990-01-01 与 1990-01-02 的已知得分
        assert_eq!(report.result.score, 49);
        assert_eq!(report.result.level, CompatLevel::Normal);
        assert_eq!(ReportOfRequest::<Test>::get(0), Some(0));
        assert_eq!(Requests::<Test>::get(0).unwrap().status, MatchStatus::Completed);

        System::assert_last_event(
            Event::ReportGenerated {
                request_id: 0,
                report_id: 0,
                score: 49,
                level: CompatLevel::Normal,
            }
            .into(),
        );

        // 一请求一报告, 重复生成报专用错误
        assert_noop!(
            Matching::generate_report(RuntimeOrigin::signed(ALICE), 0),
            Error::<Test>::ReportAlreadyGenerated
        );
        assert_noop!(
            Matching::generate_report(RuntimeOrigin::signed(BOB), 0),
            Error::<Test>::ReportAlreadyGenerated
        );
    });
}

#[test]
fn generate_report_requires_authorization_and_participation() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));

        // 未授权不可生成
        assert_noop!(
            Matching::generate_report(RuntimeOrigin::signed(ALICE), 0),
            Error::<Test>::InvalidStatus
        );

        assert_ok!(Matching::authorize_match(RuntimeOrigin::signed(BOB), 0));
        // 第三方不可生成
        assert_noop!(
            Matching::generate_report(RuntimeOrigin::signed(CHARLIE), 0),
            Error::<Test>::NotParticipant
        );
        // 对方也可生成
        assert_ok!(Matching::generate_report(RuntimeOrigin::signed(BOB), 0));
    });
}

#[test]
fn generate_report_fails_when_chart_deleted() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();
        assert_ok!(Matching::request_match(
            RuntimeOrigin::signed(ALICE),
            alice_chart,
            BOB,
            bob_chart,
        ));
        assert_ok!(Matching::authorize_match(RuntimeOrigin::signed(BOB), 0));

        assert_ok!(SajuChart::delete_chart(RuntimeOrigin::signed(BOB), bob_chart));
        assert_noop!(
            Matching::generate_report(RuntimeOrigin::signed(ALICE), 0),
            Error::<Test>::ChartNotFound
        );
    });
}

#[test]
fn compatibility_of_is_free_and_symmetric() {
    new_test_ext().execute_with(|| {
        let (alice_chart, bob_chart) = setup_pair();

        let ab = Matching::compatibility_of(alice_chart, bob_chart).unwrap();
        let ba = Matching::compatibility_of(bob_chart, alice_chart).unwrap();
        assert_eq!(ab.score, 49);
        assert_eq!(ab.score, ba.score);
        assert_eq!(ab.level, ba.level);

        assert!(Matching::compatibility_of(alice_chart, 99).is_none());
        // 只读查询不落任何存储
        assert!(Reports::<Test>::iter().next().is_none());
    });
}

use ibc_app_interchain_accounts::host::handler::{
    authorize_tx, register_interchain_account, run_tx,
};
use ibc_app_interchain_accounts::query::query_interchain_account;
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::path::PermissionPath;
use ibc_app_interchain_accounts::types::{
    derive_address, AccountAddress, ChainAccountTx, ChannelPath, Params,
};
use ibc_testkit::fixtures::applications::interchain_accounts::{
    dummy_channel_path, dummy_interchain_host, registered_interchain_account,
};
use ibc_testkit::testapp::ibc::applications::interchain_accounts::router::MockRouter;
use ibc_testkit::testapp::ibc::applications::interchain_accounts::types::{
    encode_tx, MockInterchainHost, MockMsg,
};
use rstest::*;

const OUTSIDER: AccountAddress = AccountAddress::new([0xBB; 32]);

#[fixture]
fn path_a() -> ChannelPath {
    dummy_channel_path("portA", "channel-0")
}

#[fixture]
fn path_b() -> ChannelPath {
    dummy_channel_path("portA", "channel-1")
}

#[fixture]
fn host() -> MockInterchainHost {
    dummy_interchain_host().build()
}

fn send(from: AccountAddress, to: AccountAddress, amount: u64) -> MockMsg {
    MockMsg::Send { from, to, amount }
}

#[rstest]
fn register_binds_account_to_channel(mut host: MockInterchainHost, path_a: ChannelPath) {
    let address = register_interchain_account(&mut host, &path_a, &[0x01]).unwrap();

    assert_eq!(address, derive_address(&path_a, &[0x01]));

    let account = host.account(&address).unwrap();
    assert!(account.is_interchain());
    assert_eq!(account.sequence(), 1);
    assert!(account.pub_key().is_none());

    let record = host
        .committed()
        .store
        .get(&PermissionPath::new(&address).to_string())
        .unwrap();
    assert_eq!(record.as_slice(), b"portA/channel-0");
    assert_eq!(
        query_interchain_account(&host, &address).unwrap(),
        Some(path_a)
    );
}

#[rstest]
fn register_is_idempotent(mut host: MockInterchainHost, path_a: ChannelPath) {
    let first = register_interchain_account(&mut host, &path_a, b"salt").unwrap();
    let state = host.committed().clone();

    let second = register_interchain_account(&mut host, &path_a, b"salt").unwrap();

    assert_eq!(first, second);
    assert_eq!(host.committed(), &state);
}

#[rstest]
fn register_separates_paths_and_salts(
    mut host: MockInterchainHost,
    path_a: ChannelPath,
    path_b: ChannelPath,
) {
    let a0 = registered_interchain_account(&mut host, &path_a, b"0");
    let a1 = registered_interchain_account(&mut host, &path_a, b"1");
    let b0 = registered_interchain_account(&mut host, &path_b, b"0");

    assert_ne!(a0, a1);
    assert_ne!(a0, b0);
    assert_ne!(a1, b0);
    assert_eq!(host.committed().accounts.len(), 3);
}

#[rstest]
fn register_rejects_funded_address(mut host: MockInterchainHost, path_a: ChannelPath) {
    let address = derive_address(&path_a, b"salt");
    host.fund(address, 5);
    let state = host.committed().clone();

    let res = register_interchain_account(&mut host, &path_a, b"salt");

    assert!(matches!(
        res,
        Err(InterchainAccountError::AccountAlreadyExists { address: a }) if a == address
    ));
    assert_eq!(host.committed(), &state);
}

#[rstest]
fn register_claims_unused_account_when_allowed(path_a: ChannelPath) {
    let address = derive_address(&path_a, b"salt");
    let mut host = dummy_interchain_host()
        .params(Params {
            claim_unused_accounts: true,
            ..Params::default()
        })
        .balances(vec![(address, 5)])
        .build();

    assert_eq!(
        register_interchain_account(&mut host, &path_a, b"salt").unwrap(),
        address
    );
    assert!(host.account(&address).unwrap().is_interchain());
    assert_eq!(host.balance(&address), 5);
}

#[rstest]
fn register_never_claims_keyed_account(path_a: ChannelPath) {
    let address = derive_address(&path_a, b"salt");
    let mut host = dummy_interchain_host()
        .params(Params {
            claim_unused_accounts: true,
            ..Params::default()
        })
        .build();
    host.sign_with_key(address, vec![0x02; 33]);

    assert!(matches!(
        register_interchain_account(&mut host, &path_a, b"salt"),
        Err(InterchainAccountError::AccountAlreadyExists { .. })
    ));
    assert!(!host.account(&address).unwrap().is_interchain());
}

#[rstest]
fn register_rejects_colliding_channel(mut host: MockInterchainHost) {
    let owner = dummy_channel_path("portA", "channel-12");
    let intruder = dummy_channel_path("portA", "channel-1");

    let address = registered_interchain_account(&mut host, &owner, b"");
    assert_eq!(derive_address(&intruder, b"2"), address);

    assert!(matches!(
        register_interchain_account(&mut host, &intruder, b"2"),
        Err(InterchainAccountError::AccountAlreadyExists { .. })
    ));
    assert_eq!(
        query_interchain_account(&host, &address).unwrap(),
        Some(owner)
    );
}

#[rstest]
fn register_fails_when_host_disabled(path_a: ChannelPath) {
    let mut host = dummy_interchain_host()
        .params(Params {
            host_enabled: false,
            ..Params::default()
        })
        .build();

    assert!(matches!(
        register_interchain_account(&mut host, &path_a, b"salt"),
        Err(InterchainAccountError::HostDisabled)
    ));
    assert!(host.committed().accounts.is_empty());
}

#[rstest]
fn register_writes_nothing_on_store_failure(mut host: MockInterchainHost, path_a: ChannelPath) {
    host.fail_permission_writes = true;

    let res = register_interchain_account(&mut host, &path_a, b"salt");

    assert!(res.as_ref().is_err_and(|e| e.is_internal()));
    assert!(host.committed().accounts.is_empty());
    assert!(host.committed().store.is_empty());
}

#[rstest]
fn run_tx_moves_funds(mut host: MockInterchainHost, path_a: ChannelPath) {
    let router = MockRouter::new_with_bank();
    let ica = registered_interchain_account(&mut host, &path_a, b"salt");
    host.fund(ica, 100);

    let tx = encode_tx(&[send(ica, OUTSIDER, 40)]);
    let extras = run_tx(&mut host, &router, &path_a, &tx).unwrap();

    assert_eq!(host.balance(&ica), 60);
    assert_eq!(host.balance(&OUTSIDER), 40);
    assert_eq!(extras.log.len(), 1);
}

#[rstest]
fn run_tx_rejects_foreign_channel(
    mut host: MockInterchainHost,
    path_a: ChannelPath,
    path_b: ChannelPath,
) {
    let router = MockRouter::new_with_bank();
    let ica = registered_interchain_account(&mut host, &path_a, &[0x01]);
    host.fund(ica, 100);

    let tx = encode_tx(&[send(ica, OUTSIDER, 40)]);

    assert!(matches!(
        run_tx(&mut host, &router, &path_b, &tx),
        Err(InterchainAccountError::Unauthorized { signer, .. }) if signer == ica
    ));
    assert_eq!(host.balance(&ica), 100);
}

#[rstest]
fn run_tx_rejects_normal_signer(mut host: MockInterchainHost, path_a: ChannelPath) {
    let router = MockRouter::new_with_bank();
    host.fund(OUTSIDER, 100);

    let tx = encode_tx(&[send(OUTSIDER, OUTSIDER, 1)]);

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, &tx),
        Err(InterchainAccountError::Unauthorized { .. })
    ));
}

#[rstest]
fn run_tx_rejects_account_with_published_key(
    mut host: MockInterchainHost,
    path_a: ChannelPath,
) {
    let router = MockRouter::new_with_bank();
    let ica = registered_interchain_account(&mut host, &path_a, b"salt");
    host.fund(ica, 100);
    host.sign_with_key(ica, vec![0x02; 33]);

    let tx = encode_tx(&[send(ica, OUTSIDER, 40)]);

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, &tx),
        Err(InterchainAccountError::Unauthorized { .. })
    ));
    assert_eq!(query_interchain_account(&host, &ica).unwrap(), None);
}

#[rstest]
fn authorize_checks_every_signer(
    mut host: MockInterchainHost,
    path_a: ChannelPath,
    path_b: ChannelPath,
) {
    let own_1 = registered_interchain_account(&mut host, &path_a, b"1");
    let own_2 = registered_interchain_account(&mut host, &path_a, b"2");
    let foreign = registered_interchain_account(&mut host, &path_b, b"1");

    let tx = ChainAccountTx::new(vec![
        send(own_1, OUTSIDER, 1),
        send(own_2, OUTSIDER, 1),
        send(own_1, OUTSIDER, 1),
    ])
    .unwrap();
    assert!(authorize_tx(&host, &path_a, &tx).is_ok());

    let tx = ChainAccountTx::new(vec![send(own_1, OUTSIDER, 1), send(foreign, OUTSIDER, 1)])
        .unwrap();
    assert!(matches!(
        authorize_tx(&host, &path_a, &tx),
        Err(InterchainAccountError::Unauthorized { signer, .. }) if signer == foreign
    ));
}

#[rstest]
fn failing_msg_rolls_back_batch(mut host: MockInterchainHost, path_a: ChannelPath) {
    let router = MockRouter::new_with_bank();
    let ica = registered_interchain_account(&mut host, &path_a, b"salt");
    host.fund(ica, 100);
    let state = host.committed().clone();

    let tx = encode_tx(&[send(ica, OUTSIDER, 40), MockMsg::Fail { signer: ica }]);

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, &tx),
        Err(InterchainAccountError::MsgFailed { index: 1, ref route, .. }) if route == "fail"
    ));
    assert_eq!(host.committed(), &state);
    assert!(host.account(&OUTSIDER).is_none());
}

#[rstest]
fn unroutable_msg_rolls_back_batch(mut host: MockInterchainHost, path_a: ChannelPath) {
    let router = MockRouter::new_with_bank();
    let ica = registered_interchain_account(&mut host, &path_a, b"salt");
    host.fund(ica, 100);
    let state = host.committed().clone();

    let tx = encode_tx(&[
        send(ica, OUTSIDER, 40),
        MockMsg::Custom {
            signer: ica,
            route: "staking".to_string(),
        },
    ]);

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, &tx),
        Err(InterchainAccountError::UnroutableMsg { ref route }) if route == "staking"
    ));
    assert_eq!(host.committed(), &state);
}

#[rstest]
fn disallowed_route_rejects_batch(path_a: ChannelPath) {
    let router = MockRouter::new_with_bank();
    let mut host = dummy_interchain_host()
        .params(Params {
            allow_routes: vec!["bank".to_string()],
            ..Params::default()
        })
        .build();
    let ica = registered_interchain_account(&mut host, &path_a, b"salt");
    host.fund(ica, 100);
    let state = host.committed().clone();

    let tx = encode_tx(&[send(ica, OUTSIDER, 40), MockMsg::Fail { signer: ica }]);

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, &tx),
        Err(InterchainAccountError::RouteNotAllowed { ref route }) if route == "fail"
    ));
    assert_eq!(host.committed(), &state);
}

#[rstest]
fn run_tx_fails_when_host_disabled(mut host: MockInterchainHost, path_a: ChannelPath) {
    let router = MockRouter::new_with_bank();
    let ica = registered_interchain_account(&mut host, &path_a, b"salt");
    host.fund(ica, 100);
    host.set_params(Params {
        host_enabled: false,
        ..Params::default()
    });

    let tx = encode_tx(&[send(ica, OUTSIDER, 40)]);

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, &tx),
        Err(InterchainAccountError::HostDisabled)
    ));
    assert_eq!(host.balance(&ica), 100);
}

#[rstest]
#[case(b"".as_slice())]
#[case(b"not json".as_slice())]
fn run_tx_rejects_malformed_tx_without_reading_ledger(
    mut host: MockInterchainHost,
    path_a: ChannelPath,
    #[case] tx_bytes: &[u8],
) {
    let router = MockRouter::new_with_bank();

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, tx_bytes),
        Err(InterchainAccountError::DecodeTx { .. })
    ));
    assert_eq!(host.ledger_reads(), 0);
}

#[rstest]
fn run_tx_rejects_empty_batch(mut host: MockInterchainHost, path_a: ChannelPath) {
    let router = MockRouter::new_with_bank();

    assert!(matches!(
        run_tx(&mut host, &router, &path_a, &encode_tx(&[])),
        Err(InterchainAccountError::EmptyTx)
    ));
    assert_eq!(host.ledger_reads(), 0);
}

#[rstest]
fn query_ignores_normal_accounts(mut host: MockInterchainHost) {
    host.fund(OUTSIDER, 1);

    assert_eq!(query_interchain_account(&host, &OUTSIDER).unwrap(), None);
    assert_eq!(
        query_interchain_account(&host, &AccountAddress::new([0xCC; 32])).unwrap(),
        None
    );
}

#[rstest]
fn only_registration_marks_interchain_accounts(
    mut host: MockInterchainHost,
    path_a: ChannelPath,
) {
    let router = MockRouter::new_with_bank();
    let ica = registered_interchain_account(&mut host, &path_a, b"salt");
    host.fund(ica, 100);

    // Funds relayed to a derived address that was never registered.
    let unregistered = derive_address(&path_a, b"later");
    let tx = encode_tx(&[send(ica, unregistered, 30)]);
    run_tx(&mut host, &router, &path_a, &tx).unwrap();

    // A keyed account whose sequence lands on 1, and a keyless one too.
    host.sign_with_key(OUTSIDER, vec![0x02; 33]);
    host.set_sequence(&OUTSIDER, 1);
    let keyless = AccountAddress::new([0xCC; 32]);
    host.fund(keyless, 5);
    host.set_sequence(&keyless, 1);

    for address in [unregistered, OUTSIDER, keyless] {
        assert!(!host.account(&address).unwrap().is_interchain());
        assert_eq!(query_interchain_account(&host, &address).unwrap(), None);

        let tx = encode_tx(&[send(address, ica, 1)]);
        assert!(matches!(
            run_tx(&mut host, &router, &path_a, &tx),
            Err(InterchainAccountError::Unauthorized { signer, .. }) if signer == address
        ));
    }

    assert_eq!(host.balance(&unregistered), 30);
    assert_eq!(host.balance(&ica), 70);
}

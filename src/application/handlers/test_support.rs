//! Shared wiring for handler tests.

use std::sync::Arc;

use crate::adapters::clock::ManualClock;
use crate::adapters::events::InMemoryEventBus;
use crate::adapters::storage::InMemoryLedgerRepository;
use crate::application::GovernanceWriter;
use crate::domain::foundation::{CommandMetadata, MemberId};
use crate::domain::governance::GovernancePolicy;

pub(crate) struct Harness {
    pub writer: Arc<GovernanceWriter>,
    pub bus: Arc<InMemoryEventBus>,
    pub clock: Arc<ManualClock>,
}

pub(crate) fn id(s: &str) -> MemberId {
    MemberId::new(s).unwrap()
}

pub(crate) fn as_member(s: &str) -> CommandMetadata {
    CommandMetadata::new(id(s)).with_source("test")
}

/// Founds an organization presided by `founder` and adds `members`.
pub(crate) async fn harness(members: &[&str]) -> Harness {
    harness_with_policy(members, GovernancePolicy::default()).await
}

pub(crate) async fn harness_with_policy(members: &[&str], policy: GovernancePolicy) -> Harness {
    let bus = Arc::new(InMemoryEventBus::new());
    let clock = Arc::new(ManualClock::at_unix_secs(0));
    let writer = Arc::new(GovernanceWriter::new(
        Arc::new(InMemoryLedgerRepository::new()),
        bus.clone(),
        clock.clone(),
    ));
    writer.bootstrap(id("founder"), policy).await.unwrap();

    for name in members {
        let identity = id(name);
        writer
            .execute("add_member", &as_member("founder"), move |ledger, _, now| {
                ledger.add_member(identity, now)
            })
            .await
            .unwrap();
    }
    bus.clear();

    Harness { writer, bus, clock }
}

/// Promotes `name` to Executive with the founder's approval.
pub(crate) async fn promote(h: &Harness, name: &str) {
    h.writer
        .execute("initiate_promotion", &as_member(name), |ledger, caller, now| {
            ledger.initiate_promotion(caller, now)
        })
        .await
        .unwrap();
    let candidate = id(name);
    h.writer
        .execute("approve_promotion", &as_member("founder"), move |ledger, caller, now| {
            ledger.approve_promotion(caller, &candidate, now)
        })
        .await
        .unwrap();
    h.bus.clear();
}

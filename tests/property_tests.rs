//! Property tests for the dry-run gate.
//!
//! These check classification and auditing invariants across arbitrary
//! operation names and arbitrary, possibly empty, request contexts.

mod common;

use std::sync::Arc;

use common::StubLoadBalancer;
use dryrun_gate::audit::{AuditTrail, Component, Severity};
use dryrun_gate::model::slb::{
    DescribeLoadBalancersArgs, LoadBalancer, SetDeleteProtectionArgs, TagsArgs,
};
use dryrun_gate::policy::{Decision, PolicyTable};
use dryrun_gate::{CallerIdentity, LoadBalancerApi, LoadBalancerProxy, RequestContext};
use proptest::prelude::*;

fn arb_component() -> impl Strategy<Value = Component> {
    prop_oneof![
        Just(Component::Slb),
        Just(Component::Ecs),
        Just(Component::Pvtz),
        Just(Component::Vpc),
    ]
}

// Strategy: a context with any subset of its slots populated
fn arb_context() -> impl Strategy<Value = RequestContext> {
    (
        prop::option::of((
            prop::string::string_regex("[a-z0-9-]{0,12}").unwrap(),
            prop::string::string_regex("[a-z0-9-]{0,12}").unwrap(),
        )),
        prop::option::of(prop::string::string_regex("lb-[a-z0-9]{0,8}").unwrap()),
        prop::option::of(".{0,20}"),
    )
        .prop_map(|(caller, target, reason)| {
            let mut ctx = RequestContext::new();
            if let Some((namespace, name)) = caller {
                ctx = ctx.with_caller(CallerIdentity::new(namespace, name));
            }
            if let Some(id) = target {
                ctx = ctx.with_target(LoadBalancer {
                    load_balancer_id: id,
                    ..Default::default()
                });
            }
            if let Some(reason) = reason {
                ctx = ctx.with_reason(reason);
            }
            ctx
        })
}

proptest! {
    /// Property: classification depends only on the operation name
    #[test]
    fn proptest_classification_is_deterministic(
        component in arb_component(),
        operation in ".{0,40}",
    ) {
        let first = PolicyTable::for_component(component).classify(&operation);
        let second = PolicyTable::for_component(component).classify(&operation);
        prop_assert_eq!(first, second);
    }

    /// Property: names outside the family surface are denied
    #[test]
    fn proptest_unknown_operations_fail_closed(
        component in arb_component(),
        operation in "[a-z]{1,20}",
    ) {
        // Every known operation starts with an upper-case letter or a prefix
        // containing a dot, so these are never on the surface.
        let table = PolicyTable::for_component(component);
        prop_assert_eq!(table.classify(&operation), Decision::DenyAndAudit);
    }

    /// Property: denied calls never reach the client and always produce one
    /// ERROR event, whatever the context holds
    #[test]
    fn proptest_denial_is_safe_for_any_context(ctx in arb_context()) {
        let stub = Arc::new(StubLoadBalancer::default());
        let trail = Arc::new(AuditTrail::new());
        let proxy = LoadBalancerProxy::new(stub.clone(), trail.clone());

        let result = proxy.set_delete_protection(&ctx, &SetDeleteProtectionArgs::default());

        prop_assert!(result.unwrap_err().is_blocked());
        prop_assert_eq!(stub.log.count(), 0);

        let events = trail.events();
        prop_assert_eq!(events.len(), 1);
        prop_assert_eq!(events[0].severity(), Severity::Error);
        prop_assert_eq!(events[0].key(), ctx.caller_identity().key());
        prop_assert_eq!(events[0].resource_id(), ctx.target_resource().load_balancer_id.as_str());
    }

    /// Property: reads and allowed mutations forward exactly once
    #[test]
    fn proptest_forwarded_calls_reach_client_once(ctx in arb_context()) {
        let stub = Arc::new(StubLoadBalancer::default());
        let trail = Arc::new(AuditTrail::new());
        let proxy = LoadBalancerProxy::new(stub.clone(), trail.clone());

        proxy.describe_load_balancers(&ctx, &DescribeLoadBalancersArgs::default()).unwrap();
        prop_assert!(trail.is_empty());

        proxy.add_tags(&ctx, &TagsArgs::default()).unwrap();
        prop_assert_eq!(stub.log.operations(), vec!["DescribeLoadBalancers", "AddTags"]);
        prop_assert_eq!(trail.len(), 1);
        prop_assert_eq!(trail.events()[0].severity(), Severity::Normal);
    }
}

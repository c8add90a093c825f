use std::collections::HashSet;

use futures::future::join_all;
use tracing::{debug, warn};
use witsml_locator::{parse, try_parse, QueryTarget};
use witsml_session::{ObjectCatalogSession, TransportError, TransportResult};
use witsml_types::{
    CatalogRecord, Listing, ObjectRecord, ObjectType, QueryLevel, ResourceIdentifier, WellRef,
    WellboreRef,
};

use crate::config::ResolverConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::report::{Diagnostic, Resolution};

/// A requested type token after table lookup.
#[derive(Clone, Copy, Debug)]
enum Requested<'a> {
    Known(ObjectType),
    Unknown(&'a str),
}

/// Resolves query targets into resource identifiers through a session.
///
/// The resolver holds no connection state. The session is borrowed for the
/// duration of one call, so a single resolver can serve any number of
/// sessions.
#[derive(Clone, Debug, Default)]
pub struct CatalogResolver {
    config: ResolverConfig,
}

impl CatalogResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a target to its child identifiers, in order.
    pub async fn resolve<S>(&self, target: &QueryTarget, session: &S) -> CatalogResult<Vec<ResourceIdentifier>>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        Ok(self.resolve_with_report(target, session).await?.identifiers)
    }

    /// Resolve a target, keeping the diagnostics alongside the identifiers.
    ///
    /// - server level lists wells matching the target's well filter
    /// - well level lists the well's wellbores
    /// - wellbore level lists each requested object type
    ///
    /// Only a failed server or well listing is fatal. At wellbore level an
    /// unknown or failing type is recorded and skipped, unless
    /// [`ResolverConfig::require_any_success`] is set and nothing succeeded.
    pub async fn resolve_with_report<S>(&self, target: &QueryTarget, session: &S) -> CatalogResult<Resolution>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        debug!(locator = %target, level = %target.level(), "resolving catalog target");
        if let Some(wellbore) = target.wellbore() {
            self.resolve_objects(wellbore, target.object_types(), session).await
        } else if let Some(well) = target.well() {
            self.resolve_wellbores(well, session).await
        } else {
            self.resolve_wells(target.well_filter(), session).await
        }
    }

    /// Parse a locator and resolve it in one step.
    pub async fn available_objects<S, T>(
        &self,
        uri: &str,
        object_types: &[T],
        well_filter: &str,
        session: &S,
    ) -> CatalogResult<Resolution>
    where
        S: ObjectCatalogSession + ?Sized,
        T: AsRef<str>,
    {
        let target = if self.config.strict_locators {
            try_parse(uri, object_types, well_filter)?
        } else {
            parse(uri, object_types, well_filter)
        };
        self.resolve_with_report(&target, session).await
    }

    async fn resolve_wells<S>(&self, filter: &str, session: &S) -> CatalogResult<Resolution>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        let listing = session.list_wells(filter).await.map_err(|e| {
            warn!(level = "server", error = %e, "well listing failed");
            CatalogError::upstream(QueryLevel::Server, e)
        })?;
        let mut resolution = Resolution::default();
        collect_listing(&mut resolution, listing, QueryLevel::Server, "well", "");
        Ok(resolution)
    }

    async fn resolve_wellbores<S>(&self, well: &WellRef, session: &S) -> CatalogResult<Resolution>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        let listing = session.list_wellbores(&well.id).await.map_err(|e| {
            warn!(level = "well", well_id = %well.id, error = %e, "wellbore listing failed");
            CatalogError::upstream(QueryLevel::Well, e)
        })?;
        let mut resolution = Resolution::default();
        collect_listing(&mut resolution, listing, QueryLevel::Well, "wellbore", &well.path());
        Ok(resolution)
    }

    async fn resolve_objects<S>(
        &self,
        wellbore: &WellboreRef,
        tokens: &[String],
        session: &S,
    ) -> CatalogResult<Resolution>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        let requested = plan(tokens);
        let known: Vec<ObjectType> = requested
            .iter()
            .filter_map(|r| match r {
                Requested::Known(ty) => Some(*ty),
                Requested::Unknown(_) => None,
            })
            .collect();

        let outcomes = self
            .fan_out(&known, &wellbore.well.id, &wellbore.id, session)
            .await;

        let parent_path = wellbore.path();
        let mut outcomes = outcomes.into_iter();
        let mut resolution = Resolution::default();
        let mut last_failure: Option<TransportError> = None;
        let mut failed = 0usize;

        for request in requested {
            match request {
                Requested::Unknown(token) => {
                    warn!(token, "unknown object type requested, skipping");
                    resolution
                        .diagnostics
                        .push(Diagnostic::UnknownType { token: token.to_string() });
                }
                Requested::Known(ty) => {
                    let Some(outcome) = outcomes.next() else { break };
                    match outcome {
                        Ok(listing) => {
                            collect_listing(&mut resolution, listing, QueryLevel::Wellbore, ty.tag(), &parent_path)
                        }
                        Err(e) => {
                            warn!(
                                object_type = %ty,
                                well_id = %wellbore.well.id,
                                wellbore_id = %wellbore.id,
                                error = %e,
                                "object listing failed, skipping type"
                            );
                            resolution.diagnostics.push(Diagnostic::ListingFailed {
                                object_type: ty,
                                error: e.to_string(),
                            });
                            failed += 1;
                            last_failure = Some(e);
                        }
                    }
                }
            }
        }

        if self.config.require_any_success && !known.is_empty() && failed == known.len() {
            if let Some(source) = last_failure {
                return Err(CatalogError::upstream(QueryLevel::Wellbore, source));
            }
        }

        Ok(resolution)
    }

    /// One listing per type, results in the order of `types`.
    async fn fan_out<S>(
        &self,
        types: &[ObjectType],
        well_id: &str,
        wellbore_id: &str,
        session: &S,
    ) -> Vec<TransportResult<Listing<ObjectRecord>>>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        if self.config.concurrent_fanout {
            join_all(types.iter().map(|ty| session.list_objects(*ty, well_id, wellbore_id))).await
        } else {
            let mut outcomes = Vec::with_capacity(types.len());
            for ty in types {
                outcomes.push(session.list_objects(*ty, well_id, wellbore_id).await);
            }
            outcomes
        }
    }
}

/// Look up each token once. Repeated tokens are dropped so no child is
/// listed twice.
fn plan(tokens: &[String]) -> Vec<Requested<'_>> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|token| {
            let fresh = seen.insert(token.to_uppercase());
            if !fresh {
                debug!(token = %token, "dropping repeated object type");
            }
            fresh
        })
        .map(|token| match ObjectType::from_token(token) {
            Some(ty) => Requested::Known(ty),
            None => Requested::Unknown(token.as_str()),
        })
        .collect()
}

/// Append one identifier per present record; count and report the holes.
fn collect_listing<R: CatalogRecord>(
    resolution: &mut Resolution,
    listing: Listing<R>,
    level: QueryLevel,
    kind: &str,
    parent_path: &str,
) {
    let total = listing.len();
    let before = resolution.identifiers.len();
    resolution.identifiers.extend(
        listing
            .iter()
            .flatten()
            .map(|record| ResourceIdentifier::from_record(record, kind, parent_path)),
    );
    let skipped = total - (resolution.identifiers.len() - before);
    if skipped > 0 {
        warn!(level = %level, kind, skipped, "skipped null entries in listing");
        resolution.diagnostics.push(Diagnostic::SkippedNulls {
            level,
            kind: kind.to_string(),
            count: skipped,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use witsml_session::InMemoryCatalog;
    use witsml_types::{WellRecord, WellboreRecord};

    use crate::test_support::ScriptedSession;

    fn wellbore() -> WellboreRef {
        WellboreRef::new(WellRef::new("W1", "w1"), "WB1", "wb1")
    }

    fn objects(names: &[(&str, &str)]) -> Listing<ObjectRecord> {
        names.iter().map(|(n, i)| Some(ObjectRecord::new(*n, *i))).collect()
    }

    fn unreachable() -> TransportError {
        TransportError::Unreachable("connection refused".into())
    }

    // ---- server level ----

    #[tokio::test]
    async fn server_level_lists_wells_with_empty_parent() {
        let session = ScriptedSession::new().with_wells(vec![
            Some(WellRecord::new("W1", "w1")),
            Some(WellRecord::new("W2", "w2")),
        ]);
        let ids = CatalogResolver::default()
            .resolve(&QueryTarget::server(""), &session)
            .await
            .unwrap();
        assert_eq!(
            ids,
            vec![
                ResourceIdentifier::new("W1", "w1", "well", ""),
                ResourceIdentifier::new("W2", "w2", "well", ""),
            ]
        );
    }

    #[tokio::test]
    async fn server_level_forwards_filter() {
        let session = ScriptedSession::new().with_wells(Vec::new());
        CatalogResolver::default()
            .resolve(&QueryTarget::server("alpha"), &session)
            .await
            .unwrap();
        assert_eq!(session.calls(), vec!["wells:alpha".to_string()]);
    }

    #[tokio::test]
    async fn server_level_empty_is_not_an_error() {
        let session = ScriptedSession::new().with_wells(Vec::new());
        let ids = CatalogResolver::default()
            .resolve(&QueryTarget::server(""), &session)
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn server_level_failure_is_fatal() {
        let session = ScriptedSession::new().failing_wells(unreachable());
        let err = CatalogResolver::default()
            .resolve(&QueryTarget::server(""), &session)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UpstreamUnavailable { level: QueryLevel::Server, .. }
        ));
    }

    #[tokio::test]
    async fn server_level_skips_holes() {
        let session = ScriptedSession::new().with_wells(vec![
            Some(WellRecord::new("W1", "w1")),
            None,
            Some(WellRecord::new("W3", "w3")),
        ]);
        let resolution = CatalogResolver::default()
            .resolve_with_report(&QueryTarget::server(""), &session)
            .await
            .unwrap();
        assert_eq!(resolution.identifiers.len(), 2);
        assert_eq!(resolution.skipped_nulls(), 1);
    }

    // ---- well level ----

    #[tokio::test]
    async fn well_level_parent_path_from_target() {
        let session = ScriptedSession::new().with_wellbores(
            "w1",
            vec![Some(WellboreRecord::new("Other", "x", "WB1", "wb1"))],
        );
        let target = QueryTarget::well(WellRef::new("W1", "w1"), "");
        let ids = CatalogResolver::default().resolve(&target, &session).await.unwrap();
        assert_eq!(ids, vec![ResourceIdentifier::new("WB1", "wb1", "wellbore", "/W1(w1)")]);
    }

    #[tokio::test]
    async fn well_level_failure_is_fatal() {
        let session = ScriptedSession::new().failing_wellbores("w1", unreachable());
        let target = QueryTarget::well(WellRef::new("W1", "w1"), "");
        let err = CatalogResolver::default().resolve(&target, &session).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UpstreamUnavailable { level: QueryLevel::Well, .. }
        ));
    }

    #[tokio::test]
    async fn well_level_empty_is_not_an_error() {
        let session = ScriptedSession::new().with_wellbores("w1", Vec::new());
        let target = QueryTarget::well(WellRef::new("W1", "w1"), "");
        let resolution = CatalogResolver::default()
            .resolve_with_report(&target, &session)
            .await
            .unwrap();
        assert!(resolution.identifiers.is_empty());
        assert!(resolution.diagnostics.is_empty());
        assert_eq!(session.calls(), vec!["wellbores:w1".to_string()]);
    }

    #[tokio::test]
    async fn well_level_skips_holes() {
        let session = ScriptedSession::new().with_wellbores(
            "w1",
            vec![
                None,
                Some(WellboreRecord::new("W1", "w1", "WB1", "wb1")),
                None,
                Some(WellboreRecord::new("W1", "w1", "WB2", "wb2")),
            ],
        );
        let target = QueryTarget::well(WellRef::new("W1", "w1"), "");
        let resolution = CatalogResolver::default()
            .resolve_with_report(&target, &session)
            .await
            .unwrap();
        let ids: Vec<_> = resolution.identifiers.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["wb1", "wb2"]);
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::SkippedNulls {
                level: QueryLevel::Well,
                kind: "wellbore".into(),
                count: 2,
            }]
        );
        assert!(!resolution.is_partial());
    }

    // ---- wellbore level ----

    #[tokio::test]
    async fn log_and_mudlog_example() {
        let session = ScriptedSession::new()
            .with_objects(ObjectType::Log, objects(&[("Log1", "l1")]))
            .with_objects(ObjectType::MudLog, objects(&[("Mud1", "m1")]));
        let target = QueryTarget::wellbore(wellbore(), ["LOG", "MUDLOG"], "");
        let ids = CatalogResolver::default().resolve(&target, &session).await.unwrap();
        assert_eq!(
            ids,
            vec![
                ResourceIdentifier::new("Log1", "l1", "log", "/W1(w1)/WB1(wb1)"),
                ResourceIdentifier::new("Mud1", "m1", "mudLog", "/W1(w1)/WB1(wb1)"),
            ]
        );
    }

    #[tokio::test]
    async fn listing_uses_well_and_wellbore_ids() {
        let session = ScriptedSession::new();
        let target = QueryTarget::wellbore(wellbore(), ["RIG"], "");
        CatalogResolver::default().resolve(&target, &session).await.unwrap();
        assert_eq!(session.calls(), vec!["objects:rig:w1:wb1".to_string()]);
    }

    #[tokio::test]
    async fn partial_failure_keeps_siblings_in_order() {
        let session = ScriptedSession::new()
            .with_objects(ObjectType::Log, objects(&[("Log1", "l1"), ("Log2", "l2")]))
            .failing_objects(ObjectType::Trajectory, TransportError::Timeout("30s".into()))
            .with_objects(ObjectType::Rig, objects(&[("Rig1", "r1")]));
        let target = QueryTarget::wellbore(wellbore(), ["LOG", "TRAJECTORY", "RIG"], "");
        let resolution = CatalogResolver::default()
            .resolve_with_report(&target, &session)
            .await
            .unwrap();
        let kinds: Vec<_> = resolution.identifiers.iter().map(|i| i.kind.as_str()).collect();
        assert_eq!(kinds, ["log", "log", "rig"]);
        assert_eq!(resolution.failed_types(), vec![ObjectType::Trajectory]);
        assert!(resolution.is_partial());
    }

    #[tokio::test]
    async fn unknown_type_is_a_diagnostic_only() {
        let session =
            ScriptedSession::new().with_objects(ObjectType::Log, objects(&[("Log1", "l1")]));
        let target = QueryTarget::wellbore(wellbore(), ["NOTAREALTYPE", "LOG"], "");
        let resolution = CatalogResolver::default()
            .resolve_with_report(&target, &session)
            .await
            .unwrap();
        assert_eq!(resolution.identifiers.len(), 1);
        assert_eq!(resolution.identifiers[0].kind, "log");
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::UnknownType { token: "NOTAREALTYPE".into() }]
        );
        assert_eq!(session.calls(), vec!["objects:log:w1:wb1".to_string()]);
    }

    #[tokio::test]
    async fn holes_within_a_type_are_skipped() {
        let session = ScriptedSession::new().with_objects(
            ObjectType::Tubular,
            vec![
                Some(ObjectRecord::new("T1", "t1")),
                None,
                Some(ObjectRecord::new("T3", "t3")),
            ],
        );
        let target = QueryTarget::wellbore(wellbore(), ["TUBULAR"], "");
        let resolution = CatalogResolver::default()
            .resolve_with_report(&target, &session)
            .await
            .unwrap();
        assert_eq!(resolution.identifiers.len(), 2);
        assert_eq!(
            resolution.diagnostics,
            vec![Diagnostic::SkippedNulls {
                level: QueryLevel::Wellbore,
                kind: "tubular".into(),
                count: 1,
            }]
        );
    }

    #[tokio::test]
    async fn each_type_is_handled_exclusively() {
        // Neighbouring table rows must not leak into each other.
        let session = ScriptedSession::new()
            .with_objects(ObjectType::Attachment, objects(&[("A1", "a1")]))
            .with_objects(ObjectType::BhaRun, objects(&[("B1", "b1")]))
            .with_objects(ObjectType::ChangeLog, objects(&[("C1", "c1")]))
            .with_objects(ObjectType::ConvCore, objects(&[("CC1", "cc1")]))
            .with_objects(ObjectType::ObjectGroup, objects(&[("G1", "g1")]))
            .with_objects(ObjectType::OpsReport, objects(&[("O1", "o1")]))
            .with_objects(ObjectType::StimJob, objects(&[("S1", "s1")]))
            .with_objects(ObjectType::SurveyProgram, objects(&[("P1", "p1")]));
        for (token, tag) in [
            ("ATTACHMENT", "attachment"),
            ("CHANGELOG", "changeLog"),
            ("OBJECTGROUP", "objectGroup"),
            ("STIMJOB", "stimJob"),
        ] {
            let target = QueryTarget::wellbore(wellbore(), [token], "");
            let ids = CatalogResolver::default().resolve(&target, &session).await.unwrap();
            assert_eq!(ids.len(), 1, "{token}");
            assert_eq!(ids[0].kind, tag);
        }
    }

    #[tokio::test]
    async fn parent_path_is_shared_across_types() {
        let mut session = ScriptedSession::new();
        for ty in ObjectType::ALL {
            session = session.with_objects(ty, objects(&[("X", "x")]));
        }
        let tokens: Vec<&str> = ObjectType::ALL.iter().map(|t| t.token()).collect();
        let target = QueryTarget::wellbore(wellbore(), &tokens, "");
        let ids = CatalogResolver::default().resolve(&target, &session).await.unwrap();
        assert_eq!(ids.len(), ObjectType::ALL.len());
        assert!(ids.iter().all(|i| i.parent_path == "/W1(w1)/WB1(wb1)"));
        let kinds: Vec<_> = ids.iter().map(|i| i.kind.as_str()).collect();
        let tags: Vec<_> = ObjectType::ALL.iter().map(|t| t.tag()).collect();
        assert_eq!(kinds, tags);
    }

    #[tokio::test]
    async fn concurrent_fanout_keeps_request_order() {
        let session = ScriptedSession::new()
            .with_objects(ObjectType::Log, objects(&[("Log1", "l1")]))
            .with_delay(ObjectType::Log, Duration::from_millis(40))
            .with_objects(ObjectType::Risk, objects(&[("Risk1", "k1")]))
            .with_delay(ObjectType::Risk, Duration::from_millis(5))
            .with_objects(ObjectType::Target, objects(&[("T1", "t1")]));
        let target = QueryTarget::wellbore(wellbore(), ["LOG", "RISK", "TARGET"], "");
        let concurrent = CatalogResolver::default().resolve(&target, &session).await.unwrap();
        let sequential = CatalogResolver::new(ResolverConfig::sequential())
            .resolve(&target, &session)
            .await
            .unwrap();
        let names: Vec<_> = concurrent.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Log1", "Risk1", "T1"]);
        assert_eq!(concurrent, sequential);
    }

    #[tokio::test]
    async fn repeated_types_are_listed_once() {
        let session =
            ScriptedSession::new().with_objects(ObjectType::Log, objects(&[("Log1", "l1")]));
        let target = QueryTarget::wellbore(wellbore(), ["LOG", "log", "LOG"], "");
        let ids = CatalogResolver::default().resolve(&target, &session).await.unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(session.calls().len(), 1);
    }

    #[tokio::test]
    async fn all_failures_still_succeed_by_default() {
        let session = ScriptedSession::new()
            .failing_objects(ObjectType::Log, unreachable())
            .failing_objects(ObjectType::MudLog, unreachable());
        let target = QueryTarget::wellbore(wellbore(), ["LOG", "MUDLOG"], "");
        let resolution = CatalogResolver::default()
            .resolve_with_report(&target, &session)
            .await
            .unwrap();
        assert!(resolution.identifiers.is_empty());
        assert_eq!(resolution.failed_types().len(), 2);
    }

    #[tokio::test]
    async fn all_failures_fatal_when_success_required() {
        let session = ScriptedSession::new()
            .failing_objects(ObjectType::Log, unreachable())
            .failing_objects(ObjectType::MudLog, unreachable());
        let config = ResolverConfig { require_any_success: true, ..Default::default() };
        let target = QueryTarget::wellbore(wellbore(), ["LOG", "WIDGET", "MUDLOG"], "");
        let err = CatalogResolver::new(config).resolve(&target, &session).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UpstreamUnavailable { level: QueryLevel::Wellbore, .. }
        ));
    }

    #[tokio::test]
    async fn one_success_satisfies_required_success() {
        let session = ScriptedSession::new()
            .failing_objects(ObjectType::Log, unreachable())
            .with_objects(ObjectType::MudLog, Vec::new());
        let config = ResolverConfig { require_any_success: true, ..Default::default() };
        let target = QueryTarget::wellbore(wellbore(), ["LOG", "MUDLOG"], "");
        let ids = CatalogResolver::new(config).resolve(&target, &session).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn only_unknown_types_never_fail() {
        let config = ResolverConfig { require_any_success: true, ..Default::default() };
        let target = QueryTarget::wellbore(wellbore(), ["WIDGET"], "");
        let ids = CatalogResolver::new(config)
            .resolve(&target, &ScriptedSession::new())
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    // ---- against the in-memory catalog ----

    fn catalog() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.insert_well(WellRecord::new("Alpha", "w1")).unwrap();
        catalog.insert_well(WellRecord::new("Bravo", "w2")).unwrap();
        catalog.insert_wellbore("w1", "Main", "wb1").unwrap();
        catalog.insert_wellbore("w2", "Pilot", "wb2").unwrap();
        catalog
            .insert_object("w1", "wb1", ObjectType::Log, ObjectRecord::new("GR", "l1"))
            .unwrap();
        catalog
            .insert_object("w1", "wb1", ObjectType::Trajectory, ObjectRecord::new("Plan", "t1"))
            .unwrap();
        catalog
    }

    #[tokio::test]
    async fn server_then_well_round_trip() {
        let catalog = catalog();
        let resolver = CatalogResolver::default();
        let wells = resolver.resolve(&QueryTarget::server(""), &catalog).await.unwrap();
        for well in wells {
            let target = QueryTarget::well(WellRef::new(&well.name, &well.id), "");
            let children = resolver.resolve(&target, &catalog).await.unwrap();
            assert!(!children.is_empty());
            for child in children {
                assert_eq!(child.parent_path, format!("/{}({})", well.name, well.id));
            }
        }
    }

    #[tokio::test]
    async fn resolve_is_idempotent() {
        let catalog = catalog();
        let resolver = CatalogResolver::default();
        let target = QueryTarget::wellbore(
            WellboreRef::new(WellRef::new("Alpha", "w1"), "Main", "wb1"),
            ["TRAJECTORY", "LOG", "RIG"],
            "",
        );
        let first = resolver.resolve(&target, &catalog).await.unwrap();
        let second = resolver.resolve(&target, &catalog).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].kind, "trajectory");
    }

    #[tokio::test]
    async fn resolves_through_a_trait_object() {
        let catalog = catalog();
        let session: &dyn ObjectCatalogSession = &catalog;
        let ids = CatalogResolver::default()
            .resolve(&QueryTarget::server("bravo"), session)
            .await
            .unwrap();
        assert_eq!(ids, vec![ResourceIdentifier::new("Bravo", "w2", "well", "")]);
    }

    #[tokio::test]
    async fn available_objects_degrades_malformed_locator() {
        let catalog = catalog();
        let resolution = CatalogResolver::default()
            .available_objects("/Alpha(w1)/Main", &["LOG"], "", &catalog)
            .await
            .unwrap();
        let kinds: Vec<_> = resolution.identifiers.iter().map(|i| i.kind.as_str()).collect();
        assert_eq!(kinds, ["wellbore"]);
    }

    #[tokio::test]
    async fn available_objects_strict_rejects_malformed_locator() {
        let catalog = catalog();
        let config = ResolverConfig { strict_locators: true, ..Default::default() };
        let err = CatalogResolver::new(config)
            .available_objects("/Alpha(w1)/Main", &["LOG"], "", &catalog)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Locator(_)));
    }

    #[tokio::test]
    async fn available_objects_wellbore_level() {
        let catalog = catalog();
        let resolution = CatalogResolver::default()
            .available_objects("/Alpha(w1)/Main(wb1)", &["log"], "", &catalog)
            .await
            .unwrap();
        assert_eq!(
            resolution.identifiers,
            vec![ResourceIdentifier::new("GR", "l1", "log", "/Alpha(w1)/Main(wb1)")]
        );
    }
}

//! Architecture contract tests.

mod support;

use support::architecture::{
    find_lines_containing, find_lines_containing_except_files,
    find_non_export_lines_in_mod_files, path_exists, read_relative,
};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn cli_does_not_drive_outbound_ports_directly() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["crate::port::outbound", "crate::adapter::outbound", "crate::application"],
    );

    assert!(
        hits.is_empty(),
        "CLI handlers should go through the operator port: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "alloy_provider",
            "alloy_signer_local",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "alloy_provider"],
    );
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn sapphire_adapters_are_wired_only_by_bootstrap() {
    let hits = find_lines_containing_except_files(
        "src",
        &["crate::adapter::outbound::sapphire"],
        &["src/infrastructure/bootstrap.rs"],
    );
    assert!(
        hits.is_empty(),
        "only the composition root should name Sapphire adapters: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read_relative("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> Result<&'static dyn OperatorPort>"),
        "operator bridge should expose `operator()` capability accessor"
    );
    assert!(
        !source.contains(".expect("),
        "operator bridge should report a missing operator as an error"
    );
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = find_lines_containing("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);
    assert!(
        hits.is_empty(),
        "operator inbound ports should not expose filesystem path types: {hits:#?}"
    );
}

#[test]
fn operator_use_cases_are_split_per_concern() {
    for concern in ["config", "network", "swap", "wallet"] {
        let port = format!("src/port/inbound/operator/{concern}.rs");
        let implementation = format!("src/infrastructure/operator/{concern}.rs");
        assert!(path_exists(&port), "expected inbound port `{port}`");
        assert!(
            path_exists(&implementation),
            "expected operator implementation `{implementation}`"
        );
    }
}

#[test]
fn swap_flow_lives_in_application_layer() {
    assert!(
        path_exists("src/application/swap/orchestrator.rs"),
        "swap sequencing should live under application/swap"
    );
    assert!(
        path_exists("src/application/swap/confirm.rs"),
        "receipt polling should live under application/swap"
    );

    let source = read_relative("src/application/swap/orchestrator.rs");
    assert!(
        source.contains("impl SwapSession for SwapOrchestrator"),
        "orchestrator should back the inbound swap session"
    );
}

//! `profile describe` integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_describe_switch_profile() {
    let workspace = common::TestWorkspace::new();
    let file = workspace.copy_fixture("switch.yaml");

    common::bfprofile_cmd(&workspace)
        .args(["profile", "describe", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source packages:"))
        .stdout(predicate::str::contains("- thrift"))
        .stdout(predicate::str::contains("Configuration options:"))
        .stdout(predicate::str::contains("Build targets:"))
        .stdout(predicate::str::contains("- x1_tofino"))
        .stdout(predicate::str::contains(
            "p4studio dependencies install --source-packages bridge,libcli,thrift",
        ))
        .stdout(predicate::str::contains(
            "p4studio configure ^sai ^tofino2 ^tofino2m ^tofino3 switch thrift-switch tofino --p4ppflags -DFOO",
        ))
        .stdout(predicate::str::contains("p4studio build x1_tofino"));
}

#[test]
fn test_describe_does_not_list_text_options() {
    let workspace = common::TestWorkspace::new();
    let file = workspace.copy_fixture("switch.yaml");

    let output = common::bfprofile_cmd(&workspace)
        .args(["profile", "describe", &file])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    let options = text.find("Configuration options:").unwrap();
    let targets = text.find("Build targets:").unwrap();
    assert!(!text[options..targets].contains("p4ppflags"));
}

#[test]
fn test_describe_bsp_override() {
    let workspace = common::TestWorkspace::new();
    let file = workspace.copy_fixture("asic.yaml");

    common::bfprofile_cmd(&workspace)
        .args(["profile", "describe", "--bsp-path", "/tmp/other-bsp.tgz", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bsp-path /tmp/other-bsp.tgz"))
        .stdout(predicate::str::contains("bf-reference-bsp").not());
}

#[test]
fn test_describe_bsp_override_from_env() {
    let workspace = common::TestWorkspace::new();
    let file = workspace.copy_fixture("asic.yaml");

    common::bfprofile_cmd(&workspace)
        .env("BFPROFILE_BSP_PATH", "/srv/bsp.tgz")
        .args(["profile", "describe", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bsp-path /srv/bsp.tgz"));
}

#[test]
fn test_describe_pinned_packages() {
    let workspace = common::TestWorkspace::new();
    let file = workspace.copy_fixture("pinned.yaml");

    common::bfprofile_cmd(&workspace)
        .args(["profile", "describe", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("--source-packages bridge,boost"))
        .stdout(predicate::str::contains("- grpc").not());
}

#[test]
fn test_describe_custom_studio() {
    let workspace = common::TestWorkspace::new();
    let file = workspace.copy_fixture("pinned.yaml");

    common::bfprofile_cmd(&workspace)
        .args(["--studio", "/opt/sde/p4studio", "profile", "describe", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("/opt/sde/p4studio build"));
}

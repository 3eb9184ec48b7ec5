// tests/sync.rs

//! End-to-end sync planning over `pacman -Qi` snapshots and want-list files.

mod common;

use std::collections::BTreeSet;

use common::{Fixture, pkg};
use spacman::{AlpmComparator, Error, SyncSession, WantList, plan_sync};

fn names(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

#[test]
fn test_reconciliation_scenario() {
    let fx = Fixture::new(
        &[
            pkg("A", "1.0-1").depends(&["B"]),
            pkg("B", "1.0-1"),
            pkg("C", "1.0-1"),
            pkg("D", "1.0-1"),
        ],
        "A\n",
    );

    let wants = WantList::load(&fx.want_list).unwrap();
    let report = plan_sync(&fx.source(), AlpmComparator, &wants).unwrap();

    assert_eq!(names(&report.plan.to_remove), vec!["C", "D"]);
    assert!(report.plan.to_install.is_empty());
    assert_eq!(report.closure_size, 2);
    assert_eq!(report.installed_count, 4);
}

#[test]
fn test_unknown_root_want_is_installed_not_fatal() {
    let fx = Fixture::new(&[pkg("A", "1.0-1")], "Z\n");

    let wants = WantList::load(&fx.want_list).unwrap();
    let report = plan_sync(&fx.source(), AlpmComparator, &wants).unwrap();

    assert_eq!(names(&report.plan.to_install), vec!["Z"]);
    assert_eq!(names(&report.plan.to_remove), vec!["A"]);
}

#[test]
fn test_missing_dependency_of_wanted_package_aborts() {
    let fx = Fixture::new(
        &[
            pkg("app", "2.0-1").depends(&["libfoo>=2.0", "glibc"]),
            pkg("glibc", "2.39-1"),
            pkg("libfoo", "1.0-1").provides(&["libfoo-abi=1"]),
            pkg("other", "1.0-1"),
        ],
        "app\n",
    );

    let wants = WantList::load(&fx.want_list).unwrap();
    let session = SyncSession::load(&fx.source(), AlpmComparator).unwrap();

    // libfoo is installed by name, so the constraint is not re-checked
    assert!(session.plan(&wants).is_ok());

    let fx = Fixture::new(
        &[
            pkg("app", "2.0-1").depends(&["libbar>=2.0"]),
            pkg("libbar-legacy", "1.0-1").provides(&["libbar=1.0"]),
        ],
        "app\n",
    );
    let err = plan_sync(&fx.source(), AlpmComparator, &WantList::load(&fx.want_list).unwrap())
        .unwrap_err();
    match err {
        Error::MissingDependencies(missing) => {
            assert_eq!(missing.len(), 1);
            assert_eq!(missing[0].name, "libbar>=2.0");
            assert_eq!(missing[0].required_by, "app");
        }
        other => panic!("expected MissingDependencies, got {:?}", other),
    }
}

#[test]
fn test_broken_package_outside_closure_only_warns() {
    let fx = Fixture::new(
        &[
            pkg("A", "1.0-1"),
            pkg("broken", "1.0-1").depends(&["ghost", "foo<>1.0"]),
        ],
        "A\n",
    );

    let report = plan_sync(
        &fx.source(),
        AlpmComparator,
        &WantList::load(&fx.want_list).unwrap(),
    )
    .unwrap();

    assert_eq!(names(&report.plan.to_remove), vec!["broken"]);
    let rendered: Vec<String> = report.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            ":: broken : The dependency ghost can't be recognized.",
            ":: broken : The dependency foo<>1.0 has unrecognizable syntax.",
        ]
    );
}

#[test]
fn test_cycle_in_snapshot() {
    let fx = Fixture::new(
        &[
            pkg("A", "1.0-1").depends(&["B"]),
            pkg("B", "1.0-1").depends(&["A"]),
            pkg("C", "1.0-1"),
        ],
        "B\n",
    );

    let report = plan_sync(
        &fx.source(),
        AlpmComparator,
        &WantList::load(&fx.want_list).unwrap(),
    )
    .unwrap();
    assert_eq!(names(&report.plan.to_remove), vec!["C"]);
    assert_eq!(report.closure_size, 2);
}

#[test]
fn test_dependencies_through_provides() {
    let fx = Fixture::new(
        &[
            pkg("bash", "5.2.026-2").provides(&["sh"]).depends(&["readline>=7.0", "libreadline.so=8-64"]),
            pkg("readline", "8.2.010-1").provides(&["libreadline.so=8-64"]),
            pkg("base", "3-2").depends(&["sh"]),
            pkg("vim", "9.1-1"),
        ],
        "# core\nbase\n",
    );

    let report = plan_sync(
        &fx.source(),
        AlpmComparator,
        &WantList::load(&fx.want_list).unwrap(),
    )
    .unwrap();

    assert_eq!(names(&report.plan.to_remove), vec!["vim"]);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_toml_want_list() {
    let fx = Fixture::with_want_file(
        &[pkg("A", "1.0-1"), pkg("B", "1.0-1")],
        "system.toml",
        "[model]\nversion = 1\ninstall = [\"B\", \"Q\"]\n",
    );

    let report = plan_sync(
        &fx.source(),
        AlpmComparator,
        &WantList::load(&fx.want_list).unwrap(),
    )
    .unwrap();
    assert_eq!(names(&report.plan.to_remove), vec!["A"]);
    assert_eq!(names(&report.plan.to_install), vec!["Q"]);
}

#[test]
fn test_plan_is_deterministic() {
    let packages = [
        pkg("jdk17", "17.0.1-1").provides(&["java-runtime=17"]),
        pkg("jdk21", "21.0.2-1").provides(&["java-runtime=21"]),
        pkg("app", "1.0-1").depends(&["java-runtime"]),
        pkg("tool", "1.0-1").depends(&["java-runtime>=17"]),
    ];
    let fx = Fixture::new(&packages, "app\n");
    let wants = WantList::load(&fx.want_list).unwrap();

    let first = plan_sync(&fx.source(), AlpmComparator, &wants).unwrap();
    for _ in 0..5 {
        let again = plan_sync(&fx.source(), AlpmComparator, &wants).unwrap();
        assert_eq!(again.plan, first.plan);
    }
    // No unversioned provider, so the highest version wins
    assert_eq!(names(&first.plan.to_remove), vec!["jdk17", "tool"]);
}

#[test]
fn test_remove_and_closure_partition_installed() {
    let fx = Fixture::new(
        &[
            pkg("A", "1").depends(&["B"]),
            pkg("B", "1").depends(&["C"]),
            pkg("C", "1"),
            pkg("D", "1").depends(&["C"]),
            pkg("E", "1"),
        ],
        "A\nE\n",
    );

    let session = SyncSession::load(&fx.source(), AlpmComparator).unwrap();
    let wants = WantList::load(&fx.want_list).unwrap();
    let closure = session.closure(&wants);
    let report = session.plan(&wants).unwrap();

    let installed: BTreeSet<String> = session.graph().names().map(str::to_string).collect();
    let union: BTreeSet<String> = closure
        .packages
        .union(&report.plan.to_remove)
        .cloned()
        .collect();
    assert_eq!(union, installed);
    assert!(closure.packages.is_disjoint(&report.plan.to_remove));
}

#[test]
fn test_report_serializes_to_json() {
    let fx = Fixture::new(
        &[pkg("A", "1").depends(&["ghost"]), pkg("B", "1")],
        "B\nZ\n",
    );

    let report = plan_sync(
        &fx.source(),
        AlpmComparator,
        &WantList::load(&fx.want_list).unwrap(),
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["plan"]["to_remove"], serde_json::json!(["A"]));
    assert_eq!(json["plan"]["to_install"], serde_json::json!(["Z"]));
    assert_eq!(json["diagnostics"][0]["kind"], "unrecognized");
    assert_eq!(json["diagnostics"][0]["package"], "A");
    assert_eq!(json["installed_count"], 2);
}

#[test]
fn test_missing_want_list() {
    let fx = Fixture::new(&[pkg("A", "1")], "");
    let missing = fx.dir.path().join("nope.conf");
    let err = WantList::load(&missing).unwrap_err();
    assert!(err.to_string().contains("No such file"));
}

#[test]
fn test_missing_snapshot_file() {
    let fx = Fixture::new(&[pkg("A", "1")], "A\n");
    let source = spacman::SnapshotFile::new(fx.dir.path().join("absent.txt"));
    let err = SyncSession::load(&source, AlpmComparator).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn test_duplicate_package_in_snapshot() {
    let fx = Fixture::new(&[pkg("A", "1"), pkg("A", "2")], "A\n");
    let err = SyncSession::load(&fx.source(), AlpmComparator).unwrap_err();
    assert!(matches!(err, Error::MetadataFormatError(_)));
}

#[test]
fn test_failed_plan_serializes_missing_and_diagnostics() {
    let fx = Fixture::new(
        &[
            pkg("app", "2.0-1").depends(&["libbar>=2.0", "ghost"]),
            pkg("libbar-legacy", "1.0-1").provides(&["libbar=1.0"]),
        ],
        "app\n",
    );

    let session = SyncSession::load(&fx.source(), AlpmComparator).unwrap();
    let err = session
        .plan(&WantList::load(&fx.want_list).unwrap())
        .unwrap_err();
    let json = serde_json::to_value(session.failure(&err)).unwrap();

    assert!(json["error"].as_str().unwrap().contains("libbar>=2.0"));
    assert_eq!(
        json["missing"],
        serde_json::json!([
            {"name": "ghost", "required_by": "app"},
            {"name": "libbar>=2.0", "required_by": "app"},
        ])
    );
    assert_eq!(json["diagnostics"][0]["kind"], "unsatisfiable");
    assert_eq!(json["diagnostics"][0]["spec"], "libbar>=2.0");
    assert_eq!(json["diagnostics"][1]["kind"], "unrecognized");
    assert_eq!(json["diagnostics"][1]["spec"], "ghost");
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command specs.

use crate::prelude::*;

const MONOREPO_GENERATED: &str = "(file:*.pb.go||file:api/proto/*/*_pb2.py||file:api/proto/*_pb2.py\
||file:vendor//*||file:web/dist//*)&&!(file:api/proto/handwritten_pb2.py||file:web/dist/keep.js)";

/// > Every directive file contributes patterns anchored at its own directory
#[test]
fn scan_fixture_text_output() {
    scan().on("monorepo").passes().stdout_eq(&format!(
        "3 directive files, 6 directives, 7 patterns\n\
         Generated (#630330)\n  {gen}\n\
         Handwritten\n  !({gen})\n",
        gen = MONOREPO_GENERATED
    ));
}

#[test]
fn scan_fixture_json_output() {
    let json = scan().on("monorepo").json().passes();

    assert_eq!(json.scope_pattern("generated"), MONOREPO_GENERATED);
    assert_eq!(
        json.scope_pattern("non_generated"),
        format!("!({})", MONOREPO_GENERATED)
    );
    assert_eq!(json.require("generated")["name"], "Generated");
    assert_eq!(json.require("generated")["color"], "630330");
    assert!(json.require("non_generated").get("color").is_none());

    assert_eq!(json.classification("vendor//*"), Some(true));
    assert_eq!(json.classification("web/dist//*"), Some(true));
    assert_eq!(json.classification("web/dist/keep.js"), Some(false));
    assert_eq!(json.classification("api/proto/handwritten_pb2.py"), Some(false));

    assert_eq!(json.require("stats")["files"], 3);
    assert_eq!(json.require("stats")["directives"], 6);
    assert!(json.require("timestamp").is_string());
}

#[test]
fn scan_accepts_path_argument() {
    let temp = default_project();
    temp.file("repo/.gitattributes", "gen/** linguist-generated\n");

    scan()
        .pwd(temp.path())
        .args(&["repo"])
        .passes()
        .stdout_has("  file:gen//*\n");
}

#[test]
fn empty_project_generates_nothing() {
    let temp = default_project();

    scan().pwd(temp.path()).passes().stdout_eq(
        "0 directive files, 0 directives, 0 patterns\n\
         linguist-generated-true (#630330)\n  (matches nothing)\n\
         linguist-generated-false\n  file:*//*\n",
    );
}

/// > An explicit false is never overwritten by a later true
#[test]
fn false_entries_are_sticky() {
    let temp = default_project();
    temp.file(
        ".gitattributes",
        "gen/** linguist-generated=false\ngen/** linguist-generated=true\nout/** linguist-generated\n",
    );

    let json = scan().pwd(temp.path()).json().passes();
    assert_eq!(json.classification("gen//*"), Some(false));
    assert_eq!(json.scope_pattern("generated"), "file:out//*&&!(file:gen//*)");
}

/// > `-linguist-generated` unsets the attribute
#[test]
fn unset_attribute_is_not_generated() {
    let temp = default_project();
    temp.file(
        ".gitattributes",
        "vendor/** linguist-generated\nvendor/keep.go -linguist-generated\n",
    );

    let json = scan().pwd(temp.path()).json().passes();
    assert_eq!(json.classification("vendor/keep.go"), Some(false));
    assert_eq!(
        json.scope_pattern("generated"),
        "file:vendor//*&&!(file:vendor/keep.go)"
    );
}

#[test]
fn only_non_generated_entries_generate_nothing() {
    let temp = default_project();
    temp.file(".gitattributes", "src/** linguist-generated=false\n");

    let json = scan().pwd(temp.path()).json().passes();
    assert_eq!(json.scope_pattern("generated"), "");
    assert_eq!(json.scope_pattern("non_generated"), "file:*//*");
}

#[test]
fn at_sign_segment_is_reported() {
    let temp = default_project();
    temp.file(".gitattributes", "@/x linguist-generated\nlib@2/** linguist-generated\n");

    scan()
        .pwd(temp.path())
        .passes()
        .stdout_has("  file:lib*2//*\n")
        .stdout_has("warning: 1 pattern dropped");
}

#[test]
fn recursion_limit_flag_skips_directives() {
    let temp = default_project();
    temp.file(".gitattributes", "a/**/b/**/c linguist-generated\n");

    scan()
        .pwd(temp.path())
        .args(&["--max-recursive-segments", "1"])
        .passes()
        .stdout_has("warning: 1 directive skipped");
}

#[test]
fn excluded_directories_are_not_scanned() {
    let temp = default_project();
    temp.config("[scan]\nexclude = [\"third_party\"]\n");
    temp.file(".gitattributes", "gen/** linguist-generated\n");
    temp.file("third_party/.gitattributes", "** linguist-generated\n");

    scan()
        .pwd(temp.path())
        .passes()
        .stdout_has("1 directive file,")
        .stdout_lacks("third_party");
}

#[test]
fn custom_directive_file_name() {
    let temp = default_project();
    temp.config("[scan]\ndirective_file = \"attributes.txt\"\n");
    temp.file("attributes.txt", "gen/** linguist-generated\n");
    temp.file(".gitattributes", "other/** linguist-generated\n");

    let json = scan().pwd(temp.path()).json().passes();
    assert_eq!(json.scope_pattern("generated"), "file:gen//*");
}

#[test]
fn missing_path_is_an_argument_error() {
    let temp = default_project();

    scan()
        .pwd(temp.path())
        .args(&["does-not-exist"])
        .exits(2)
        .stderr_has("genscope: argument error");
}

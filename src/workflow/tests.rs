// json-env-export: JSON to environment variable exporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{command, escape_data, escape_property};

#[test]
fn test_escape_data() {
    assert_eq!(escape_data("50% done\r\nnext"), "50%25 done%0D%0Anext");
    assert_eq!(escape_data("a:b,c"), "a:b,c");
}

#[test]
fn test_escape_property() {
    assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
}

#[test]
fn test_command_rendering() {
    let lines = [
        command("warning", &[], "Will re-write \"FOO\" environment variable."),
        command("set-env", &[("name", "MY:VAR")], "line1\nline2"),
        command("debug", &[], ""),
    ];
    insta::assert_snapshot!(lines.join("\n"), @r#"
    ::warning::Will re-write "FOO" environment variable.
    ::set-env name=MY%3AVAR::line1%0Aline2
    ::debug::
    "#);
}

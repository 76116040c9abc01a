//! Snapshot tests over the sample documents
//!
//! Parses the verified sources under `docs/samples/` and asserts their
//! serialized form. The samples are the canonical wiki sources for this
//! crate; tests should read them instead of inlining copies.

use std::fs;

use infobox::wiki::parse;

/// Helper: parse a sample file and serialize the filtered document.
fn parse_sample_to_json(name: &str) -> String {
    let path = format!("docs/samples/{}", name);
    let source = fs::read_to_string(&path).expect("failed to read sample document");
    let infobox = parse(&source).expect("sample document parses");
    serde_json::to_string(&infobox).expect("document serializes")
}

#[test]
fn test_000_flat_fields() {
    insta::assert_snapshot!(
        parse_sample_to_json("000-flat-fields.wiki"),
        @r#"{"subject_type":"animanga/TVAnime","entries":[{"key":"中文名","value":"Code Geass 反叛的鲁路修R2"},{"key":"Copyright","value":"（C）2006 SUNRISE inc./MBS"}]}"#
    );
}

#[test]
fn test_010_empty_values() {
    insta::assert_snapshot!(
        parse_sample_to_json("010-empty-values.wiki"),
        @r#"{"subject_type":"Game","entries":[{"key":"名称","value":"测试"}]}"#
    );
}

#[test]
fn test_020_arrays() {
    insta::assert_snapshot!(
        parse_sample_to_json("020-arrays.wiki"),
        @r#"{"subject_type":"animanga/Manga","entries":[{"key":"作者","value":"某人"},{"key":"别名","value":["第一别名","第二别名"]}]}"#
    );
}

#[test]
fn test_030_keyed_items() {
    insta::assert_snapshot!(
        parse_sample_to_json("030-keyed-items.wiki"),
        @r#"{"subject_type":"Game","entries":[{"key":"游戏名","value":"某游戏"},{"key":"平台","value":["PSP",{"key":"1","value":"PC"},{"key":"2","value":"Xbox360"}]}]}"#
    );
}

#[test]
fn test_040_reopened_array() {
    insta::assert_snapshot!(
        parse_sample_to_json("040-reopened-array.wiki"),
        @r#"{"subject_type":"Album","entries":[{"key":"歌手","value":"某歌手"},{"key":"曲目","value":["intro","outro"]}]}"#
    );
}

//! Parser Tests - Port Lists
//!
//! These tests verify that port declarations are extracted with the right
//! direction, width and net kind, in declaration order.

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::source_fixtures::*;
use rstest::rstest;
use svmodule::descriptor::{Direction, NetKind};
use svmodule::parser::{ErrorCode, ParseErrorKind, parse_module};

fn port_summary(source: &str) -> Vec<(String, Direction, u32)> {
    let interface = parse_module(source).unwrap_or_else(|e| panic!("{}", e.render(source)));
    interface
        .ports
        .iter()
        .map(|p| (p.name().to_string(), p.direction(), p.width()))
        .collect()
}

fn owned(ports: &[(&str, Direction, u32)]) -> Vec<(String, Direction, u32)> {
    ports.iter().map(|(n, d, w)| (n.to_string(), *d, *w)).collect()
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_mixed_ports() {
    let interface = parse_module(MIXED_PORTS).unwrap();
    assert_eq!(interface.name, "M");
    assert_eq!(
        port_summary(MIXED_PORTS),
        owned(&[
            ("a", Direction::Input, 8),
            ("b", Direction::Output, 1),
            ("c", Direction::Output, 1),
        ])
    );
}

#[test]
fn test_semicolon_separated_ports() {
    assert_eq!(
        port_summary(SEMICOLON_PORTS),
        owned(&[
            ("a", Direction::Input, 4),
            ("b", Direction::Input, 4),
            ("cin", Direction::Input, 1),
            ("y", Direction::Output, 4),
            ("cout", Direction::Output, 1),
        ])
    );
}

#[test]
fn test_counter_module() {
    let interface = parse_module(COUNTER).unwrap();
    assert_eq!(interface.name, "counter");
    let names: Vec<_> = interface.ports.iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, vec!["clk", "rst_n", "en", "count", "wrap"]);
    assert_eq!(interface.ports_with(Direction::Output).count(), 2);
    assert_eq!(interface.ports[3].net(), NetKind::Logic);
    assert_eq!(interface.ports[3].width(), 8);
}

#[test]
fn test_inout_ports_are_reported() {
    assert_eq!(
        port_summary(BIDIRECTIONAL),
        owned(&[("io", Direction::Inout, 2), ("oe", Direction::Input, 1)])
    );
}

#[rstest]
#[case("module M(input a); endmodule", 1)]
#[case("module M(input [0:0] a); endmodule", 1)]
#[case("module M(input [15:8] a); endmodule", 8)]
#[case("module M(input signed [31:0] a); endmodule", 32)]
#[case("module M(input logic unsigned [8'h0F:0] a); endmodule", 16)]
fn test_port_widths(#[case] source: &str, #[case] width: u32) {
    let interface = parse_module(source).unwrap();
    assert_eq!(interface.ports[0].width(), width);
}

#[rstest]
#[case("MODULE M(INPUT WIRE [1:0] a); ENDMODULE")]
#[case("Module M(Input Wire [1:0] a); EndModule")]
#[case("module M(\n  input wire [1:0] a // two bits\n);\nendmodule")]
#[case("module M(input wire [1:0] a);\r\nendmodule\r\n")]
fn test_case_and_layout_insensitive(#[case] source: &str) {
    assert_eq!(port_summary(source), owned(&[("a", Direction::Input, 2)]));
}

#[test]
fn test_comment_before_header_is_ignored() {
    let source = "// module Fake(input x); endmodule\nmodule Real(output y); endmodule";
    let interface = parse_module(source).unwrap();
    assert_eq!(interface.name, "Real");
    assert_eq!(port_summary(source), owned(&[("y", Direction::Output, 1)]));
}

#[test]
fn test_display_round_trips_declaration() {
    let interface = parse_module(MIXED_PORTS).unwrap();
    let rendered: Vec<_> = interface.ports.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["input wire [7:0] a", "output reg b", "output reg c"]
    );
}

// ============================================================================
// Failures
// ============================================================================

#[rstest]
#[case("", ErrorCode::E0101)]
#[case("// module M(); endmodule", ErrorCode::E0101)]
#[case("module M; endmodule", ErrorCode::E0201)]
#[case("module M(input a", ErrorCode::E0202)]
#[case("module M(a, b); endmodule", ErrorCode::E0203)]
#[case("module M(input a,); endmodule", ErrorCode::E0203)]
#[case("module M(input [W-1:0] a); endmodule", ErrorCode::E0205)]
#[case("module M(input wire a);", ErrorCode::E0301)]
#[case("module M(input [0:7] a); endmodule", ErrorCode::E0402)]
#[case("module M(input [4'bxx:0] a); endmodule", ErrorCode::E0401)]
fn test_port_errors(#[case] source: &str, #[case] code: ErrorCode) {
    let err = parse_module(source).unwrap_err();
    assert_eq!(err.code, code, "{}", err.render(source));
}

#[test]
fn test_error_kinds() {
    let kind = |s: &str| parse_module(s).unwrap_err().kind();
    assert_eq!(kind("nothing here"), ParseErrorKind::ModuleNotFound);
    assert_eq!(kind("module M(foo); endmodule"), ParseErrorKind::PortDeclaration);
    assert_eq!(kind("module M();"), ParseErrorKind::UnterminatedModule);
    assert_eq!(kind("module M(input [1:2] a); endmodule"), ParseErrorKind::MalformedInteger);
}

#[test]
fn test_non_ansi_port_list_hint() {
    let err = parse_module("module M(a, b); input a; output b; endmodule").unwrap_err();
    assert!(err.hint.as_deref().unwrap_or("").contains("ANSI"));
}

#[rstest]
#[case("module M(output int count); endmodule")]
#[case("module M(input bit b); endmodule")]
#[case("module M(input signed byte d); endmodule")]
fn test_data_typed_port_hint(#[case] source: &str) {
    let err = parse_module(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0203);
    let hint = err.hint.unwrap_or_default();
    assert!(hint.contains("'wire', 'reg' and 'logic'"), "{}", hint);
}

#[test]
fn test_rendered_error_points_at_line() {
    let source = "module M(\n  input a;\n  bogus b\n);\nendmodule";
    let err = parse_module(source).unwrap_err();
    assert!(err.render(source).starts_with("3:3: E0203"), "{}", err.render(source));
}

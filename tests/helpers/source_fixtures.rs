//! Common SystemVerilog fixtures for tests.

pub const EMPTY_MODULE: &str = "module M(); endmodule";

pub const MIXED_PORTS: &str = "module M(input wire [7:0] a, output reg b, c); endmodule";

pub const TWO_PARAMETERS: &str =
    "module M #(parameter W = 8, parameter N = 4) (output wire y); endmodule";

pub const COUNTER: &str = r#"
// Simple up-counter
`timescale 1ns/1ps
module counter #(
    parameter int WIDTH = 8,   // counter width
    parameter int STEP = 1
) (
    input  wire              clk,
    input  wire              rst_n,
    input  wire              en,
    output logic [7:0]       count,
    output logic             wrap
);
    always_ff @(posedge clk or negedge rst_n) begin
        if (!rst_n) count <= '0;
        else if (en) count <= count + STEP;
    end
    assign wrap = &count;
endmodule : counter
"#;

pub const SEMICOLON_PORTS: &str =
    "module alu(input [3:0] a, b; input cin; output [3:0] y; output cout);\nendmodule";

pub const BIDIRECTIONAL: &str = "module pad(inout wire [1:0] io, input oe); endmodule";

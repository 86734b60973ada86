//! Textual circuit rendering.
//!
//! [`draw`] produces a box-drawing view of a circuit, one row per qubit
//! plus a single classical rail. [`simplify`] rewrites it through a fixed
//! substitution table into plain ASCII for display surfaces that cannot
//! render box-drawing glyphs.

use crate::circuit::Circuit;
use crate::instruction::{Instruction, InstructionKind};

/// Width of one rendered instruction column.
const CELL: usize = 5;

const Q_FILL: &str = "─────";
const C_FILL: &str = "═════";

/// Fixed substitution table from box-drawing glyphs to plain ASCII.
const SUBSTITUTIONS: &[(char, char)] = &[
    ('─', '-'),
    ('│', '|'),
    ('┌', '+'),
    ('┐', '+'),
    ('└', '+'),
    ('┘', '+'),
    ('├', '+'),
    ('┤', '+'),
    ('╭', '('),
    ('╰', ')'),
    ('═', '='),
    ('║', '|'),
    ('╬', '|'),
    ('░', '/'),
    ('╩', '|'),
    ('╥', '-'),
    ('■', '%'),
];

/// Render `circuit` as box-drawing text.
///
/// One row per qubit in index order, then one condensed classical rail.
/// Every instruction occupies one fixed-width column.
pub fn draw(circuit: &Circuit) -> String {
    let nq = circuit.num_qubits() as usize;
    let labels: Vec<String> = (0..nq).map(|i| format!("q{i}: ")).collect();
    let c_label = "c: ";
    let width = labels
        .iter()
        .map(String::len)
        .chain([c_label.len()])
        .max()
        .unwrap_or(0);

    let mut rows: Vec<String> = labels.iter().map(|l| format!("{l:<width$}─")).collect();
    let mut c_row = format!("{c_label:<width$}═");

    for inst in circuit.instructions() {
        let cells = column(inst, nq);
        for (row, cell) in rows.iter_mut().zip(&cells) {
            row.push_str(cell);
            row.push('─');
        }
        c_row.push_str(&cells[nq]);
        c_row.push('═');
    }

    let mut out = String::new();
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out.push_str(&c_row);
    out.push('\n');
    out
}

/// Rewrite box-drawing text into plain ASCII via the fixed substitution
/// table. Characters outside the table pass through unchanged.
pub fn simplify(text: &str) -> String {
    text.chars()
        .map(|ch| {
            SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == ch)
                .map_or(ch, |&(_, to)| to)
        })
        .collect()
}

/// One rendered column: a cell per qubit row plus the classical rail.
fn column(inst: &Instruction, nq: usize) -> Vec<String> {
    let mut cells = vec![Q_FILL.to_string(); nq];
    cells.push(C_FILL.to_string());

    match &inst.kind {
        InstructionKind::Gate(gate) if gate.num_qubits() == 1 => {
            let q = inst.qubits[0].0 as usize;
            cells[q] = format!("┤ {} ├", gate.label());
        }
        InstructionKind::Gate(gate) => {
            let control = inst.qubits[0].0 as usize;
            let target = inst.qubits[1].0 as usize;
            let (lo, hi) = (control.min(target), control.max(target));
            for cell in cells.iter_mut().take(hi).skip(lo + 1) {
                *cell = "──│──".to_string();
            }
            cells[control] = "──■──".to_string();
            cells[target] = format!("┤ {} ├", gate.label());
        }
        InstructionKind::Reset => {
            cells[inst.qubits[0].0 as usize] = "─|0>─".to_string();
        }
        InstructionKind::Measure => {
            let q = inst.qubits[0].0 as usize;
            cells[q] = "─┤M├─".to_string();
            for cell in cells.iter_mut().take(nq).skip(q + 1) {
                *cell = "──║──".to_string();
            }
            cells[nq] = "══╩══".to_string();
        }
    }

    debug_assert!(cells.iter().all(|c| c.chars().count() == CELL));
    cells
}

/// Fixed-width table for the "view all" screen

use crate::store::Roster;

const RULE_WIDTH: usize = 45;

/// Header, rule, then one row per student, in roster order
pub fn render_table(roster: &Roster) -> Vec<String> {
    let mut lines = Vec::with_capacity(roster.len() + 2);
    lines.push(format!("{:<10} | {:<20} | {:<10}", "ID", "Name", "Grade"));
    lines.push("-".repeat(RULE_WIDTH));

    for (id, student) in roster {
        lines.push(format!(
            "{:<10} | {:<20} | {:<10}",
            id, student.name, student.grade
        ));
    }

    lines
}

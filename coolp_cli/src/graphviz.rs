use std::error::Error;
use std::fs;
use std::io::Write;

use tempfile::NamedTempFile;

use coolp_core::{Action, ParseTable};

pub fn write_graphviz_graph(output_filename: &str) -> Result<(), Box<dyn Error>> {
    let graphviz_string = render_graphviz_graph(&ParseTable::new());
    fs::write(output_filename, graphviz_string)?;
    Ok(())
}

pub fn show_graphviz_graph() -> Result<(), Box<dyn Error>> {
    let graphviz_string = render_graphviz_graph(&ParseTable::new());
    // We need the tempfile filename in order to open it with an associated application
    let mut temp_file = NamedTempFile::new()?;
    let path = format!("{}.dot", temp_file.path().display());
    write!(temp_file, "{}", graphviz_string)?;
    temp_file.persist(&path)?;
    open::that(&path)?;
    Ok(())
}

fn render_graphviz_graph(parse_table: &ParseTable) -> String {
    let mut lines = Vec::new();
    lines.push("digraph lalr_states {".to_owned());
    for state in 0..parse_table.state_count() {
        let accessing_symbol = parse_table
            .accessing_symbol(state)
            .map_or("".to_owned(), |s| escape_html(&s.to_string()));
        let reduction = match parse_table.default_action(state) {
            Action::Reduce(production) => escape_html(&production.rule().to_string()),
            Action::Accept => "accept".to_owned(),
            _ => "".to_owned(),
        };
        // Underline marks a reduction performed without reading the lookahead
        let reduction = if !reduction.is_empty() && !parse_table.consults_lookahead(state) {
            format!("<U>{}</U>", reduction)
        } else {
            reduction
        };
        let line = format!(
            r#"  State{} [shape=plain label=<
    <TABLE BORDER="0" CELLBORDER="1" CELLSPACING="0">
      <TR><TD><B>State #{}</B></TD><TD>{}</TD></TR>
      <TR><TD COLSPAN="2">{}</TD></TR>
    </TABLE>
  >];"#,
            state, state, accessing_symbol, reduction
        );
        lines.push(line);
    }
    for (from, symbol, to) in parse_table.transitions() {
        lines.push(format!(
            r#"  State{} -> State{} [label="{}"];"#,
            from,
            to,
            symbol.to_string().replace('"', "\\\"")
        ));
    }
    lines.push("}".to_owned());
    lines.join("\n")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_graph_has_every_state() {
        let graph = render_graphviz_graph(&ParseTable::new());
        assert!(graph.starts_with("digraph lalr_states {"));
        assert!(graph.contains("State157 [shape=plain"));
        assert!(graph.contains(r#"State0 -> State1 [label="CLASS"];"#));
        assert!(graph.contains(r#"State0 -> State4 [label="class"];"#));
        assert!(graph.contains(r#"State2 -> State7 [label="EOF"];"#));
    }
}

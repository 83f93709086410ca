use std::error::Error;
use std::fs::File;

use prettytable as pt;
use prettytable::cell;
use prettytable::row;

use coolp_core::{Action, ParseTable};

pub fn print_table() {
    let parse_table = ParseTable::new();
    let pretty_table = generate_pretty_table(&parse_table);
    println!("{}", pretty_table);
}

pub fn write_table_csv(csv_filename: &str) -> Result<(), Box<dyn Error>> {
    let parse_table = ParseTable::new();
    let pretty_table = generate_pretty_table(&parse_table);
    let csv_file = File::create(csv_filename)?;
    pretty_table.to_csv(csv_file)?;
    Ok(())
}

fn generate_pretty_table(parse_table: &ParseTable) -> pt::Table {
    let mut table = pt::Table::new();

    let mut title_row = row!["#", "Accessed by", "Default"];

    for t in parse_table.grammar.terminals.iter().map(|t| format!("{}", t)) {
        title_row.add_cell(cell!(t));
    }

    for n in parse_table
        .grammar
        .nonterminals
        .iter()
        .map(|n| format!("{}", n))
    {
        title_row.add_cell(cell!(n));
    }

    table.add_row(title_row);

    for state in 0..parse_table.state_count() {
        let accessing_symbol = parse_table
            .accessing_symbol(state)
            .map_or("".to_owned(), |s| format!("{}", s));
        // States with a single default reduction never look at the lookahead
        let default_action = match parse_table.default_action(state) {
            Action::Reduce(production) if !parse_table.consults_lookahead(state) => {
                format!("{} (always)", Action::Reduce(production))
            }
            action => format!("{}", action),
        };

        let mut row = row![state, accessing_symbol, default_action];

        let explicit_actions = parse_table.explicit_actions(state);
        for t in parse_table.grammar.terminals.iter() {
            row.add_cell(cell![explicit_actions
                .iter()
                .find(|(terminal, _)| terminal == t)
                .map_or("".to_owned(), |(_, a)| format!("{}", a))]);
        }

        for n in parse_table.grammar.nonterminals.iter() {
            row.add_cell(cell![parse_table
                .goto(state, *n)
                .map_or("".to_owned(), |target| format!("g{}", target))]);
        }

        table.add_row(row);
    }

    table
}

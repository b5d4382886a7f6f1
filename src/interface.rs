use std::io::BufRead;
use std::str::FromStr;

use super::error::{Error, Result};
use super::graph::Graph;
use super::model::*;

const NUM_DIRECTIONS: usize = 6;

pub struct Setup {
    pub graph: Graph,
    pub my_bases: Vec<usize>,
    pub opponent_bases: Vec<usize>,
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut input_line = String::new();
    if input.read_line(&mut input_line)? == 0 {
        return Err(Error::UnexpectedEof);
    }
    Ok(input_line)
}

fn parse<T: FromStr>(token: Option<&str>, line: &str, field: &str) -> Result<T> {
    let malformed = |reason: String| Error::MalformedInput {
        line: line.trim_end().to_string(),
        reason,
    };
    let token = token.ok_or_else(|| malformed(format!("missing {}", field)))?;
    token.trim().parse::<T>().map_err(|_| malformed(format!("invalid {}: {:?}", field, token)))
}

fn parse_bases(line: &str) -> Result<Vec<usize>> {
    line.split_whitespace().map(|token| parse(Some(token), line, "base index")).collect()
}

pub fn read_initial(input: &mut impl BufRead) -> Result<Setup> {
    let line = read_line(input)?;
    let number_of_cells: usize = parse(Some(line.as_str()), &line, "number of cells")?; // amount of hexagonal cells in this map

    let mut graph = Graph::new(number_of_cells);
    for index in 0..number_of_cells {
        let line = read_line(input)?;
        let mut inputs = line.split_whitespace();

        let code: i32 = parse(inputs.next(), &line, "cell type")?; // 0 for empty, 1 for eggs, 2 for crystal
        let resource_type = ResourceType::from_code(code).ok_or(Error::InvalidResourceType(code))?;
        let initial_resources: u32 = parse(inputs.next(), &line, "initial resources")?;
        graph.update_cell(index, CellUpdate::layout(resource_type, initial_resources))?;

        for _ in 0..NUM_DIRECTIONS {
            let neighbor: i64 = parse(inputs.next(), &line, "neighbor")?; // the index of the neighbouring cell for each direction
            if neighbor >= 0 {
                // Unknown neighbors are reported by the graph and skipped
                let _ = graph.add_directed_edge(index, neighbor as usize);
            }
        }
    }

    let line = read_line(input)?;
    let _number_of_bases: usize = parse(Some(line.as_str()), &line, "number of bases")?;
    let my_bases = parse_bases(&read_line(input)?)?;
    let opponent_bases = parse_bases(&read_line(input)?)?;

    Ok(Setup {
        graph,
        my_bases,
        opponent_bases,
    })
}

pub fn read_turn(input: &mut impl BufRead, graph: &mut Graph) -> Result<()> {
    for index in 0..graph.cell_count() {
        let line = read_line(input)?;
        let mut inputs = line.split_whitespace();

        let resources = parse(inputs.next(), &line, "resources")?; // the current amount of eggs/crystals on this cell
        let own_army = parse(inputs.next(), &line, "own ants")?; // the amount of your ants on this cell
        let opponent_army = parse(inputs.next(), &line, "opponent ants")?; // the amount of opponent ants on this cell
        graph.update_cell(index, CellUpdate::turn(resources, own_army, opponent_army))?;
    }
    Ok(())
}

pub fn format_action(action: &Action) -> String {
    let kind = action.kind();
    match action {
        Action::Beacon { cell, strength } => format!("{} {} {}", kind, cell, strength),
        Action::Line { source, target, strength } => format!("{} {} {} {}", kind, source, target, strength),
        Action::Message { text } => format!("{} {}", kind, text),
        Action::Wait => kind.to_string(),
    }
}

/// The whole turn on one line. Nothing to do is still a valid turn: `WAIT`.
pub fn format_actions(actions: &[Action]) -> String {
    if actions.is_empty() {
        return format_action(&Action::Wait);
    }
    actions.iter().map(format_action).collect::<Vec<_>>().join(";")
}

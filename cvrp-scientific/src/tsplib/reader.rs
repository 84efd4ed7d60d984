#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use super::{DuplicateNodePolicy, ParseError, ParseErrorKind, ParserConfig};
use crate::common::{GenericResult, InfoLogger, read_line};
use crate::models::{Capacity, Demand, Instance, Node};
use std::io::{BufReader, Read};

const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";
const DEMAND_SECTION: &str = "DEMAND_SECTION";
const DEPOT_SECTION: &str = "DEPOT_SECTION";
const SECTION_SUFFIX: &str = "_SECTION";
const CAPACITY: &str = "CAPACITY";
const EDGE_WEIGHT_TYPE: &str = "EDGE_WEIGHT_TYPE";
const EOF: &str = "EOF";
const DEPOT_TERMINATOR: i64 = -1;

/// A trait to read a CVRP instance written in tsplib95 like format. Please note that only a small
/// subset of the format is supported: node coordinates, demands, depots, capacity and edge weight type.
pub trait TsplibInstance {
    /// Reads the instance using default parser settings.
    fn read_tsplib(self) -> GenericResult<Instance>;
}

impl<R: Read> TsplibInstance for BufReader<R> {
    fn read_tsplib(self) -> GenericResult<Instance> {
        InstanceParser::default().read(self)
    }
}

impl TsplibInstance for String {
    fn read_tsplib(self) -> GenericResult<Instance> {
        InstanceParser::default().read(BufReader::new(self.as_bytes()))
    }
}

/// A file section which is read at the moment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Section {
    #[default]
    None,
    NodeCoords,
    Demand,
    Depot,
    /// A section which is recognized as such, but its content is not read.
    Unsupported,
}

/// Tells whether the scan should go on after the line is processed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Flow {
    Continue,
    Stop,
}

/// An instance under construction with the section it is filled from.
#[derive(Default)]
struct ParseState {
    section: Section,
    instance: Instance,
}

/// A line which is processed at the moment.
struct LineContext<'a> {
    number: usize,
    line: &'a str,
}

impl LineContext<'_> {
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.number, self.line)
    }

    fn invalid_number(&self, token: &str) -> ParseError {
        self.error(ParseErrorKind::InvalidNumber(token.to_string()))
    }
}

/// Reads lines one by one in a single pass and accumulates the instance. Sections switch the
/// parser state, scalar directives are recognized on any line.
#[derive(Clone, Default)]
pub struct InstanceParser {
    config: ParserConfig,
    logger: Option<InfoLogger>,
}

impl InstanceParser {
    /// Creates a new instance of `InstanceParser`.
    pub fn new(config: ParserConfig) -> Self {
        Self { config, logger: None }
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Parses given lines into instance. Fails on the first malformed line.
    pub fn parse<I, S>(&self, lines: I) -> Result<Instance, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParseState::default();

        for (idx, line) in lines.into_iter().enumerate() {
            if self.process_line(&mut state, idx + 1, line.as_ref())? == Flow::Stop {
                break;
            }
        }

        Ok(self.complete(state))
    }

    /// Parses text content into instance.
    pub fn parse_str(&self, content: &str) -> Result<Instance, ParseError> {
        self.parse(content.lines())
    }

    /// Reads instance from the reader. Reading stops as soon as the depot section is terminated.
    pub fn read<R: Read>(&self, mut reader: BufReader<R>) -> GenericResult<Instance> {
        let mut buffer = String::new();
        let mut state = ParseState::default();
        let mut line_number = 0;

        while read_line(&mut reader, &mut buffer)? > 0 {
            line_number += 1;
            if self.process_line(&mut state, line_number, &buffer)? == Flow::Stop {
                break;
            }
        }

        Ok(self.complete(state))
    }

    fn process_line(&self, state: &mut ParseState, number: usize, line: &str) -> Result<Flow, ParseError> {
        let ctx = LineContext { number, line: line.trim_end_matches(['\r', '\n']) };

        if let Some(section) = detect_section(ctx.line) {
            state.section = section;
            return Ok(Flow::Continue);
        }

        let tokens = ctx.line.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            [] => return Ok(Flow::Continue),
            [token] if *token == EOF => {
                self.log(&format!("end of file marker at line {number}"));
                return Ok(Flow::Stop);
            }
            _ => {}
        }

        if apply_directive(&mut state.instance, &ctx)? {
            return Ok(Flow::Continue);
        }

        match state.section {
            Section::None | Section::Unsupported => Ok(Flow::Continue),
            Section::NodeCoords => self.read_node_coord(&mut state.instance, &tokens, &ctx).map(|_| Flow::Continue),
            Section::Demand => read_demand(&mut state.instance, &tokens, &ctx).map(|_| Flow::Continue),
            Section::Depot => self.read_depot(&mut state.instance, &tokens, &ctx),
        }
    }

    fn read_node_coord(&self, instance: &mut Instance, tokens: &[&str], ctx: &LineContext) -> Result<(), ParseError> {
        let &[id, x, y] = tokens else {
            return Err(ctx.error(ParseErrorKind::MalformedLine { expected: 3, actual: tokens.len() }));
        };

        let (x, y) = (parse_coord(x, ctx)?, parse_coord(y, ctx)?);

        let Some(node) = instance.nodes.get_mut(id) else {
            instance.nodes.insert(id.to_string(), Node::new(x, y));
            return Ok(());
        };

        match self.config.duplicate_nodes {
            DuplicateNodePolicy::Merge => {
                self.log(&format!("node '{id}' is redefined at line {}, coordinates are updated", ctx.number));
                node.x = x;
                node.y = y;
            }
            DuplicateNodePolicy::Replace => {
                self.log(&format!("node '{id}' is redefined at line {}, node is replaced", ctx.number));
                *node = Node::new(x, y);
            }
            DuplicateNodePolicy::Reject => return Err(ctx.error(ParseErrorKind::DuplicateNode(id.to_string()))),
        }

        Ok(())
    }

    fn read_depot(&self, instance: &mut Instance, tokens: &[&str], ctx: &LineContext) -> Result<Flow, ParseError> {
        let &[token] = tokens else {
            return Err(ctx.error(ParseErrorKind::MalformedLine { expected: 1, actual: tokens.len() }));
        };

        let id = token.parse::<i64>().map_err(|_| ctx.invalid_number(token))?;
        if id == DEPOT_TERMINATOR {
            self.log(&format!("depot section is terminated at line {}, the rest is ignored", ctx.number));
            return Ok(Flow::Stop);
        }

        let id = id.to_string();
        let node = instance.nodes.get_mut(&id).ok_or_else(|| ctx.error(ParseErrorKind::UnknownNode(id.clone())))?;
        node.is_depot = true;

        Ok(Flow::Continue)
    }

    fn complete(&self, state: ParseState) -> Instance {
        let instance = state.instance;

        self.log(&format!(
            "parsed instance: {} nodes, {} depots, capacity: {}, edge weight type: {}",
            instance.nodes.len(),
            instance.depots().count(),
            instance.capacity.map_or_else(|| "n/a".to_string(), |capacity| capacity.to_string()),
            instance.edge_weight_type.as_deref().unwrap_or("n/a")
        ));

        instance
    }

    fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            (logger)(message);
        }
    }
}

fn read_demand(instance: &mut Instance, tokens: &[&str], ctx: &LineContext) -> Result<(), ParseError> {
    let &[id, demand] = tokens else {
        return Err(ctx.error(ParseErrorKind::MalformedLine { expected: 2, actual: tokens.len() }));
    };

    let node = instance.nodes.get_mut(id).ok_or_else(|| ctx.error(ParseErrorKind::UnknownNode(id.to_string())))?;
    node.demand = Some(demand.parse::<Demand>().map_err(|_| ctx.invalid_number(demand))?);

    Ok(())
}

/// Applies a scalar directive if the line has one. Returns true when the line is a directive line.
fn apply_directive(instance: &mut Instance, ctx: &LineContext) -> Result<bool, ParseError> {
    if ctx.line.contains(CAPACITY) {
        if let Some(digits) = first_digits(ctx.line) {
            instance.capacity = Some(digits.parse::<Capacity>().map_err(|_| ctx.invalid_number(digits))?);
        }
        Ok(true)
    } else if ctx.line.contains(EDGE_WEIGHT_TYPE) {
        if let Some(token) = trailing_word(ctx.line).filter(|token| *token != EDGE_WEIGHT_TYPE) {
            instance.edge_weight_type = Some(token.to_string());
        }
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Checks whether the token written alone or as the first token of a data line is read back as data.
pub(crate) fn is_data_token(token: &str) -> bool {
    token != EOF
        && !token.contains(CAPACITY)
        && !token.contains(EDGE_WEIGHT_TYPE)
        && detect_section(token).is_none()
}

/// Checks whether the edge weight type is read back unchanged from its directive line.
pub(crate) fn is_edge_weight_type_token(token: &str) -> bool {
    !token.is_empty()
        && token != EDGE_WEIGHT_TYPE
        && token.chars().all(is_word_char)
        && !token.contains(CAPACITY)
        && !token.contains(NODE_COORD_SECTION)
        && !token.contains(DEMAND_SECTION)
        && !token.contains(DEPOT_SECTION)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn detect_section(line: &str) -> Option<Section> {
    if line.contains(NODE_COORD_SECTION) {
        Some(Section::NodeCoords)
    } else if line.contains(DEMAND_SECTION) {
        Some(Section::Demand)
    } else if line.contains(DEPOT_SECTION) {
        Some(Section::Depot)
    } else if line.split_whitespace().next().is_some_and(|token| token.ends_with(SECTION_SUFFIX)) {
        Some(Section::Unsupported)
    } else {
        None
    }
}

fn parse_coord(token: &str, ctx: &LineContext) -> Result<f64, ParseError> {
    token.parse::<f64>().ok().filter(|value| value.is_finite()).ok_or_else(|| ctx.invalid_number(token))
}

fn first_digits(line: &str) -> Option<&str> {
    let start = line.find(|c: char| c.is_ascii_digit())?;
    let rest = &line[start..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());

    Some(&rest[..end])
}

fn trailing_word(line: &str) -> Option<&str> {
    let line = line.trim_end();
    let start = line
        .char_indices()
        .rev()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(0, |(idx, c)| idx + c.len_utf8());

    Some(&line[start..]).filter(|word| !word.is_empty())
}

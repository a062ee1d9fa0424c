use nom::{
    bytes::complete::take_till1,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::{delimited, separated_pair, tuple},
    IResult,
};
use log::warn;

pub const COLUMNS: usize = 10;
pub const EMPTY: &str = "_";

/// The ten tab-separated fields of a CoNLL-X row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    pub id: &'a str,
    pub form: &'a str,
    pub lemma: &'a str,
    pub cpos: &'a str,
    pub fpos: &'a str,
    pub feats: &'a str,
    pub head: &'a str,
    pub deprel: &'a str,
    pub phead: &'a str,
    pub pdeprel: &'a str,
}

impl<'a> Row<'a> {
    /// Splits a line on tabs. `Err` carries the column count found.
    pub fn split(line: &'a str) -> Result<Self, usize> {
        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            &[id, form, lemma, cpos, fpos, feats, head, deprel, phead, pdeprel] => Ok(Row {
                id,
                form,
                lemma,
                cpos,
                fpos,
                feats,
                head,
                deprel,
                phead,
                pdeprel,
            }),
            _ => Err(fields.len()),
        }
    }

    pub fn join(fields: [&str; COLUMNS]) -> String {
        fields.join("\t")
    }
}

fn number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |digits: &str| digits.parse::<usize>())(input)
}

/// `{1=a, 2=b}`
fn mapping(input: &str) -> IResult<&str, Vec<(usize, &str)>> {
    delimited(
        char('{'),
        separated_list1(
            tuple((char(','), space0)),
            separated_pair(number, char('='), take_till1(|c: char| c == ',' || c == '}')),
        ),
        char('}'),
    )(input)
}

/// A whole-field unsigned integer.
pub fn parse_number(field: &str) -> Option<usize> {
    all_consuming(number)(field).ok().map(|(_, value)| value)
}

/// Values of a reading column: the entries of a `{n=value}` mapping in key
/// order, or the bare field itself. A field that opens like a mapping but does
/// not parse as one is kept whole.
pub fn parse_values(field: &str) -> Vec<&str> {
    match all_consuming(mapping)(field) {
        Ok((_, mut entries)) => {
            entries.sort_by_key(|(key, _)| *key);
            entries.into_iter().map(|(_, value)| value).collect()
        }
        Err(_) => {
            if field.starts_with('{') {
                warn!("malformed reading mapping {:?}, kept as one value", field);
            }
            vec![field]
        }
    }
}

/// Inverse of [`parse_values`]: bare when there is a single value.
pub fn format_values<S: AsRef<str>>(values: &[S]) -> String {
    if let [single] = values {
        return single.as_ref().to_string();
    }
    let entries: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{}={}", index + 1, value.as_ref()))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

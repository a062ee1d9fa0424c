use std::fs;
use std::path::Path;

use accordo_tag::codec::HALF_SEPARATOR;
use accordo_tag::Reading;
use accordo_tree::{build_sentence, Attachment, Sentence, Span, TokenInput};
use log::debug;

use crate::row::{format_values, parse_number, parse_values, Row, EMPTY};
use crate::ConllError;

/// Splits a tag into the POS column (derivational half) and the feature
/// column (inflectional half, `_` if absent).
fn tag_columns(tag: &str) -> (String, String) {
    match tag.split_once(HALF_SEPARATOR) {
        Some((derivational, inflectional)) => (derivational.to_string(), inflectional.to_string()),
        None => (tag.to_string(), EMPTY.to_string()),
    }
}

fn encode_row(number: usize, form: &str, readings: &[Reading], head: &str, deprel: &str) -> String {
    let mut lemmas = Vec::with_capacity(readings.len());
    let mut pos = Vec::with_capacity(readings.len());
    let mut feats = Vec::with_capacity(readings.len());
    for reading in readings {
        let (derivational, inflectional) = tag_columns(&reading.tag());
        lemmas.push(reading.lemma().to_string());
        pos.push(derivational);
        feats.push(inflectional);
    }

    let number = number.to_string();
    let lemma = format_values(&lemmas);
    let pos = format_values(&pos);
    let feats = format_values(&feats);
    Row::join([&number, form, &lemma, &pos, &pos, &feats, head, deprel, EMPTY, EMPTY])
}

/// One row per token with head and relation filled in.
pub fn encode_sentence(sentence: &Sentence) -> Vec<String> {
    sentence
        .ids()
        .map(|id| {
            let token = &sentence[id];
            let head = token.head().map_or(0, |head| head.number()).to_string();
            let deprel = token.relation.map_or(EMPTY, |relation| relation.name());
            encode_row(id.number(), &token.form, &token.readings, &head, deprel)
        })
        .collect()
}

/// Parser input: rows with blank head and relation columns.
pub fn encode_tagged(tokens: &[TokenInput]) -> Vec<String> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| encode_row(index + 1, &token.form, &token.readings, EMPTY, EMPTY))
        .collect()
}

/// Sentences as CoNLL-X text, each followed by a blank line.
pub fn write_corpus(sentences: &[Sentence]) -> String {
    let mut out = String::new();
    for sentence in sentences {
        for row in encode_sentence(sentence) {
            out.push_str(&row);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn write_file(path: impl AsRef<Path>, sentences: &[Sentence]) -> Result<(), ConllError> {
    fs::write(path, write_corpus(sentences))?;
    Ok(())
}

/// Single characters the tokenizer splits on; they attach to the previous
/// token without a space.
fn is_tokenizing(form: &str) -> bool {
    let mut chars = form.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_punctuation() || "«»“”‘’…".contains(c),
        _ => false,
    }
}

fn decode_readings(line: usize, row: &Row<'_>) -> Result<Vec<Reading>, ConllError> {
    let lemmas = parse_values(row.lemma);
    let pos = parse_values(row.cpos);
    let feats = parse_values(row.feats);

    let count = lemmas.len().max(pos.len()).max(feats.len());
    for column in [&lemmas, &pos, &feats] {
        if column.len() != 1 && column.len() != count {
            return Err(ConllError::Readings {
                line,
                reason: format!("expected {} readings, found {}", count, column.len()),
            });
        }
    }

    Ok((0..count)
        .map(|index| {
            let pos = pick(&pos, index);
            let feat = pick(&feats, index);
            let tag = if feat == EMPTY {
                pos.to_string()
            } else {
                format!("{}{}{}", pos, HALF_SEPARATOR, feat)
            };
            Reading::new(pick(&lemmas, index), &tag)
        })
        .collect())
}

// Single-valued columns apply to every reading.
fn pick<'a>(column: &[&'a str], index: usize) -> &'a str {
    if column.len() == 1 {
        column[0]
    } else {
        column[index]
    }
}

/// A token row and its attachment, before tree construction.
struct Decoded {
    input: TokenInput,
    head: Option<usize>,
    label: Option<String>,
}

struct SentenceReader {
    tokens: Vec<Decoded>,
    // Character offset just past the previous token.
    cursor: Option<usize>,
    first_line: usize,
}

impl SentenceReader {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            cursor: None,
            first_line: 0,
        }
    }

    fn push(&mut self, line: usize, text: &str) -> Result<(), ConllError> {
        let row = Row::split(text).map_err(|found| ConllError::ColumnCount { line, found })?;

        let expected = self.tokens.len() + 1;
        if parse_number(row.id) != Some(expected) {
            return Err(ConllError::TokenNumber {
                line,
                value: row.id.to_string(),
            });
        }
        if self.tokens.is_empty() {
            self.first_line = line;
        }

        let readings = decode_readings(line, &row)?;
        let start = match self.cursor {
            None => 0,
            Some(end) if is_tokenizing(row.form) => end,
            Some(end) => end + 1,
        };
        let end = start + row.form.chars().count();
        self.cursor = Some(end);

        let head = match row.head {
            EMPTY => None,
            value => Some(parse_number(value).ok_or_else(|| ConllError::Head {
                line,
                value: value.to_string(),
            })?),
        };
        let label = (row.deprel != EMPTY).then(|| row.deprel.to_string());

        self.tokens.push(Decoded {
            input: TokenInput::new(row.form, Span::new(start, end), readings),
            head,
            label,
        });
        Ok(())
    }

    fn take(&mut self) -> Vec<Decoded> {
        self.cursor = None;
        std::mem::take(&mut self.tokens)
    }
}

/// Groups rows into sentences on blank lines, tracking character offsets.
fn read_blocks(input: &str) -> Result<Vec<(usize, Vec<Decoded>)>, ConllError> {
    let mut blocks = Vec::new();
    let mut reader = SentenceReader::new();

    for (index, text) in input.lines().enumerate() {
        let line = index + 1;
        if text.trim().is_empty() {
            if !reader.tokens.is_empty() {
                blocks.push((reader.first_line, reader.take()));
            }
            continue;
        }
        reader.push(line, text)?;
    }
    if !reader.tokens.is_empty() {
        blocks.push((reader.first_line, reader.take()));
    }

    Ok(blocks)
}

/// Tagged tokens only; head and relation columns are ignored.
pub fn read_tagged(input: &str) -> Result<Vec<Vec<TokenInput>>, ConllError> {
    Ok(read_blocks(input)?
        .into_iter()
        .map(|(_, tokens)| tokens.into_iter().map(|decoded| decoded.input).collect())
        .collect())
}

/// Parsed sentences; every row needs a numeric head.
pub fn read_corpus(input: &str) -> Result<Vec<Sentence>, ConllError> {
    let mut sentences = Vec::new();
    for (line, tokens) in read_blocks(input)? {
        let mut inputs = Vec::with_capacity(tokens.len());
        let mut attachments = Vec::with_capacity(tokens.len());
        for (offset, decoded) in tokens.into_iter().enumerate() {
            let head = decoded.head.ok_or_else(|| ConllError::Head {
                line: line + offset,
                value: EMPTY.to_string(),
            })?;
            inputs.push(decoded.input);
            attachments.push(Attachment {
                head,
                label: decoded.label,
            });
        }
        let sentence = build_sentence(inputs, &attachments)
            .map_err(|source| ConllError::Structure { line, source })?;
        sentences.push(sentence);
    }
    debug!("read {} sentences", sentences.len());
    Ok(sentences)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Sentence>, ConllError> {
    let input = fs::read_to_string(path)?;
    read_corpus(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use accordo_tag::DependencyRelation;
    use accordo_tree::TokenId;

    const MARIA: &str = "\
1\tMaria\tMaria\tNOUN-F\tNOUN-F\ts\t3\tSUBJ\t_\t_
2\tha\tavere\tAUX\tAUX\tind+pres+3+s\t3\tAUX+TENSE\t_\t_
3\tcomprato\tcomprare\tVER\tVER\tpart+past+s+m\t0\tTOP\t_\t_
4\tla\t{1=il, 2=la}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-S}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-S}\t{1=s, 2=_}\t5\tARG\t_\t_
5\tgonna\tgonna\tNOUN-F\tNOUN-F\ts\t3\tOBJ\t_\t_
6\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

    #[test]
    fn reads_a_sentence() {
        let sentences = read_corpus(MARIA).unwrap();
        assert_eq!(sentences.len(), 1);
        let sentence = &sentences[0];
        assert_eq!(sentence.len(), 6);
        assert_eq!(sentence.root(), TokenId(2));
        assert_eq!(sentence[TokenId(1)].relation, Some(DependencyRelation::AuxTense));

        let la = &sentence[TokenId(3)];
        assert_eq!(la.readings.len(), 2);
        assert_eq!(la.readings[0].tag(), "ART-F:s");
        assert_eq!(la.readings[1].tag(), "PRO-PERS-CLI-3-F-S");
        assert_eq!(la.readings[1].lemma(), "la");
    }

    #[test]
    fn offsets_follow_the_text() {
        let sentence = &read_corpus(MARIA).unwrap()[0];
        let spans: Vec<Span> = sentence.tokens().iter().map(|token| token.span).collect();
        assert_eq!(spans[0], Span::new(0, 5));
        assert_eq!(spans[1], Span::new(6, 8));
        assert_eq!(spans[4], Span::new(21, 26));
        // The full stop attaches to "gonna".
        assert_eq!(spans[5], Span::new(26, 27));
    }

    #[test]
    fn encodes_what_it_reads() {
        let sentences = read_corpus(MARIA).unwrap();
        assert_eq!(write_corpus(&sentences).replace("AUX_TENSE", "AUX+TENSE"), format!("{}\n", MARIA));
    }

    #[test]
    fn round_trip_keeps_structure() {
        let original = read_corpus(MARIA).unwrap();
        let decoded = read_corpus(&write_corpus(&original)).unwrap();
        assert_eq!(decoded.len(), 1);
        let (a, b) = (&original[0], &decoded[0]);
        assert_eq!(a.len(), b.len());
        for id in a.ids() {
            assert_eq!(a[id].form, b[id].form);
            assert_eq!(a.head(id), b.head(id));
            assert_eq!(a[id].relation, b[id].relation);
        }
    }

    #[test]
    fn tagged_rows_leave_the_tree_blank() {
        let tokens = read_tagged(MARIA).unwrap().remove(0);
        let rows = encode_tagged(&tokens);
        assert_eq!(rows[2], "3\tcomprato\tcomprare\tVER\tVER\tpart+past+s+m\t_\t_\t_\t_");
    }

    #[test]
    fn blank_heads_cannot_build_a_tree() {
        let tokens = read_tagged(MARIA).unwrap().remove(0);
        let rows = encode_tagged(&tokens).join("\n");
        assert!(matches!(read_corpus(&rows), Err(ConllError::Head { line: 1, .. })));
    }

    #[test]
    fn sentences_split_on_blank_lines() {
        let corpus = format!("{}\n{}", MARIA, MARIA);
        let sentences = read_corpus(&corpus).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1][TokenId(0)].span, Span::new(0, 5));
    }

    #[test]
    fn structural_errors_carry_the_line() {
        let broken = MARIA.replace("\t5\tARG", "\t9\tARG");
        assert!(matches!(
            read_corpus(&broken),
            Err(ConllError::Structure { line: 1, .. })
        ));
    }
}

//! Reads and writes compact tag strings such as `VER:part+past+s+f`.
//!
//! A tag has a derivational half (atoms joined by `-`) and an optional
//! inflectional half (atoms joined by `+`) after a `:`. Atoms are matched from
//! right to left against the feature kinds in priority order and finally against
//! the part-of-speech names. An atom nothing accepts is absorbed into the next
//! candidate to its left, which is how `PRO-PERS` resolves as one class. The
//! slots that matched are recorded so [`generate`] can lay the tag out again.

use alloc::string::String;
use alloc::vec::Vec;

use crate::feature::{FeatureKind, Features};
use crate::pos::PartOfSpeech;

pub const HALF_SEPARATOR: char = ':';
pub const DERIVATIONAL_DELIMITER: char = '-';
pub const INFLECTIONAL_DELIMITER: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    Lower,
    Upper,
}

impl Casing {
    fn of(atom: &str) -> Self {
        if atom.chars().any(|c| c.is_ascii_lowercase()) {
            Casing::Lower
        } else {
            Casing::Upper
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Feature(FeatureKind),
    PartOfSpeech,
}

/// One matched atom position in the original tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub kind: SlotKind,
    pub casing: Casing,
}

/// Left-to-right slot order of each half.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagLayout {
    pub derivational: Vec<Slot>,
    /// `None` when the tag had no `:` at all.
    pub inflectional: Option<Vec<Slot>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTag {
    pub pos: Option<PartOfSpeech>,
    pub features: Features,
    pub layout: TagLayout,
}

pub fn parse(tag: &str) -> ParsedTag {
    let mut parsed = ParsedTag::default();
    if tag.is_empty() {
        return parsed;
    }

    let (derivational, inflectional) = match tag.split_once(HALF_SEPARATOR) {
        Some((derivational, inflectional)) => (derivational, Some(inflectional)),
        None => (tag, None),
    };

    parsed.layout.derivational = parse_half(
        derivational,
        DERIVATIONAL_DELIMITER,
        &mut parsed.pos,
        &mut parsed.features,
    );
    parsed.layout.inflectional = inflectional.map(|half| {
        parse_half(half, INFLECTIONAL_DELIMITER, &mut parsed.pos, &mut parsed.features)
    });

    parsed
}

fn parse_half(
    half: &str,
    delimiter: char,
    pos: &mut Option<PartOfSpeech>,
    features: &mut Features,
) -> Vec<Slot> {
    // Byte ranges of every atom in the half.
    let mut bounds = Vec::new();
    let mut offset = 0;
    for atom in half.split(delimiter) {
        bounds.push((offset, offset + atom.len()));
        offset += atom.len() + delimiter.len_utf8();
    }

    let mut slots = Vec::new();
    let mut end = bounds.len();
    let mut start = end;
    while start > 0 {
        start -= 1;
        let candidate = &half[bounds[start].0..bounds[end - 1].1];
        if let Some(kind) = match_candidate(candidate, delimiter, pos, features) {
            slots.push(Slot {
                kind,
                casing: Casing::of(candidate),
            });
            end = start;
        }
    }

    slots.reverse();
    slots
}

fn match_candidate(
    candidate: &str,
    delimiter: char,
    pos: &mut Option<PartOfSpeech>,
    features: &mut Features,
) -> Option<SlotKind> {
    if let Some(kind) = FeatureKind::PRIORITY
        .iter()
        .copied()
        .find(|kind| features.fill(*kind, candidate))
    {
        return Some(SlotKind::Feature(kind));
    }

    if pos.is_none() {
        let name: String = candidate
            .chars()
            .map(|c| if c == delimiter { '_' } else { c })
            .collect();
        if let Some(found) = PartOfSpeech::from_name(&name) {
            *pos = Some(found);
            return Some(SlotKind::PartOfSpeech);
        }
    }

    None
}

/// Lays out `pos` and `features` following `layout`. Slots whose value has
/// since been cleared are dropped.
pub fn generate(pos: Option<PartOfSpeech>, features: &Features, layout: &TagLayout) -> String {
    let mut tag = String::new();
    render_half(&mut tag, &layout.derivational, DERIVATIONAL_DELIMITER, pos, features);
    if let Some(slots) = &layout.inflectional {
        tag.push(HALF_SEPARATOR);
        render_half(&mut tag, slots, INFLECTIONAL_DELIMITER, pos, features);
    }
    tag
}

fn render_half(
    out: &mut String,
    slots: &[Slot],
    delimiter: char,
    pos: Option<PartOfSpeech>,
    features: &Features,
) {
    let mut first = true;
    for slot in slots {
        let atom = match slot.kind {
            SlotKind::PartOfSpeech => match pos {
                Some(pos) => pos.name(),
                None => continue,
            },
            SlotKind::Feature(kind) => match features.atom(kind) {
                Some(atom) => atom,
                None => continue,
            },
        };

        if !first {
            out.push(delimiter);
        }
        first = false;

        for c in atom.chars() {
            out.push(match (slot.kind, slot.casing) {
                (SlotKind::PartOfSpeech, _) if c == '_' => delimiter,
                (SlotKind::PartOfSpeech, _) => c,
                (_, Casing::Upper) => c.to_ascii_uppercase(),
                (_, Casing::Lower) => c,
            });
        }
    }
}

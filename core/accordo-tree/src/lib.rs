pub mod builder;
pub mod ids;
pub mod sentence;
pub mod token;

pub use builder::{build_sentence, Attachment, StructureError, TokenInput};
pub use ids::TokenId;
pub use sentence::Sentence;
pub use token::{Span, Token};

#[cfg(test)]
mod tests {
    use super::*;
    use accordo_tag::{DependencyRelation, PartOfSpeech, Reading};

    fn input(form: &str, lemma: &str, tag: &str, start: usize) -> TokenInput {
        TokenInput::new(
            form,
            Span::new(start, start + form.chars().count()),
            vec![Reading::new(lemma, tag)],
        )
    }

    // "Maria ha comprato la gonna ."
    fn maria() -> (Vec<TokenInput>, Vec<Attachment>) {
        let inputs = vec![
            input("Maria", "Maria", "NOUN-F:s", 0),
            input("ha", "avere", "AUX:ind+pres+3+s", 6),
            input("comprato", "comprare", "VER:part+past+s+m", 9),
            input("la", "il", "ART-F:s", 18),
            input("gonna", "gonna", "NOUN-F:s", 21),
            input(".", ".", "SENT", 26),
        ];
        let attachments = vec![
            Attachment::to(3, "SUBJ"),
            Attachment::to(3, "AUX+TENSE"),
            Attachment::root(),
            Attachment::to(3, "OBJ"),
            Attachment::to(4, "ARG"),
            Attachment::to(3, "END"),
        ];
        (inputs, attachments)
    }

    #[test]
    fn builds_the_tree() {
        let (inputs, attachments) = maria();
        let sentence = build_sentence(inputs, &attachments).unwrap();

        assert_eq!(sentence.len(), 6);
        assert_eq!(sentence.root(), TokenId(2));
        assert!(sentence[TokenId(2)].is_root());
        assert_eq!(
            sentence.children(TokenId(2)),
            &[TokenId(0), TokenId(1), TokenId(3), TokenId(5)]
        );
        assert_eq!(sentence.children(TokenId(3)), &[TokenId(4)]);
        assert_eq!(sentence.head(TokenId(4)), Some(TokenId(3)));
        assert_eq!(sentence[TokenId(1)].relation, Some(DependencyRelation::AuxTense));
        assert!(sentence[TokenId(1)].has_lemma("AVERE"));
        assert!(sentence[TokenId(2)].has_pos(PartOfSpeech::Ver));
    }

    #[test]
    fn every_head_lists_its_child() {
        let (inputs, attachments) = maria();
        let sentence = build_sentence(inputs, &attachments).unwrap();
        for id in sentence.ids() {
            if let Some(head) = sentence.head(id) {
                assert!(sentence.children(head).contains(&id));
            }
        }
    }

    #[test]
    fn breadth_first_visits_every_token_once() {
        let (inputs, attachments) = maria();
        let sentence = build_sentence(inputs, &attachments).unwrap();
        let order = sentence.breadth_first();
        assert_eq!(order.len(), sentence.len());
        assert_eq!(order[0], sentence.root());
        assert_eq!(*order.last().unwrap(), TokenId(4));
    }

    #[test]
    fn unknown_labels_leave_the_relation_unset() {
        let (inputs, mut attachments) = maria();
        attachments[3] = Attachment::to(3, "NOT+A+LABEL");
        let sentence = build_sentence(inputs, &attachments).unwrap();
        assert_eq!(sentence[TokenId(3)].relation, None);
    }

    #[test]
    fn head_out_of_range() {
        let (inputs, mut attachments) = maria();
        attachments[4] = Attachment::to(9, "ARG");
        assert_eq!(
            build_sentence(inputs, &attachments).unwrap_err(),
            StructureError::HeadOutOfRange { token: 5, head: 9 }
        );
    }

    #[test]
    fn cycles_are_rejected() {
        let (inputs, mut attachments) = maria();
        // la -> gonna -> la
        attachments[3] = Attachment::to(5, "ARG");
        assert!(matches!(
            build_sentence(inputs, &attachments),
            Err(StructureError::Cycle { token: 4 | 5 })
        ));
    }

    #[test]
    fn self_attachment() {
        let (inputs, mut attachments) = maria();
        attachments[0] = Attachment::to(1, "SUBJ");
        assert_eq!(
            build_sentence(inputs, &attachments).unwrap_err(),
            StructureError::SelfAttachment { token: 1 }
        );
    }

    #[test]
    fn exactly_one_root() {
        let (inputs, mut attachments) = maria();
        attachments[0] = Attachment::root();
        assert_eq!(
            build_sentence(inputs, &attachments).unwrap_err(),
            StructureError::MultipleRoots { first: 1, second: 3 }
        );
    }

    #[test]
    fn malformed_input() {
        assert_eq!(build_sentence(Vec::new(), &[]).unwrap_err(), StructureError::Empty);

        let (inputs, attachments) = maria();
        assert_eq!(
            build_sentence(inputs, &attachments[..2]).unwrap_err(),
            StructureError::LengthMismatch { tokens: 6, attachments: 2 }
        );

        let (mut inputs, attachments) = maria();
        inputs[2].readings.clear();
        assert_eq!(
            build_sentence(inputs, &attachments).unwrap_err(),
            StructureError::NoReadings { token: 3 }
        );
    }
}

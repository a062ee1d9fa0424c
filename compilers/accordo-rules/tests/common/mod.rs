#![allow(dead_code)]

use accordo_conll::read_corpus;
use accordo_morph::{LexEntry, LexiconSynthesizer};
use accordo_tree::Sentence;

pub const COMPRATA: &str = "\
1\tMaria\tMaria\tNOUN-F\tNOUN-F\ts\t3\tSUBJ\t_\t_
2\tha\tavere\tAUX\tAUX\tind+pres+3+s\t3\tAUX+TENSE\t_\t_
3\tcomprata\tcomprare\tVER\tVER\tpart+past+s+f\t0\tTOP\t_\t_
4\tla\t{1=il, 2=la}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-S}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-S}\t{1=s, 2=_}\t5\tARG\t_\t_
5\tgonna\tgonna\tNOUN-F\tNOUN-F\ts\t3\tOBJ\t_\t_
6\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

pub const COMPRATO: &str = "\
1\tMaria\tMaria\tNOUN-F\tNOUN-F\ts\t3\tSUBJ\t_\t_
2\tha\tavere\tAUX\tAUX\tind+pres+3+s\t3\tAUX+TENSE\t_\t_
3\tcomprato\tcomprare\tVER\tVER\tpart+past+s+m\t0\tTOP\t_\t_
4\tla\t{1=il, 2=la}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-S}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-S}\t{1=s, 2=_}\t5\tARG\t_\t_
5\tgonna\tgonna\tNOUN-F\tNOUN-F\ts\t3\tOBJ\t_\t_
6\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

pub const CUCINATE: &str = "\
1\tSi\tsi\tADV\tADV\t_\t5\tRMOD\t_\t_
2\t,\t,\tPON\tPON\t_\t1\tSEPARATOR\t_\t_
3\tle\t{1=il, 2=la}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=p, 2=_}\t5\tOBJ\t_\t_
4\tho\tavere\tAUX\tAUX\tind+pres+1+s\t5\tAUX+TENSE\t_\t_
5\tcucinate\tcucinare\tVER\tVER\tpart+past+p+f\t0\tTOP\t_\t_
6\t.\t.\tSENT\tSENT\t_\t5\tEND\t_\t_
";

pub const CUCINATO: &str = "\
1\tSi\tsi\tADV\tADV\t_\t5\tRMOD\t_\t_
2\t,\t,\tPON\tPON\t_\t1\tSEPARATOR\t_\t_
3\tle\t{1=il, 2=la}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=p, 2=_}\t5\tOBJ\t_\t_
4\tho\tavere\tAUX\tAUX\tind+pres+1+s\t5\tAUX+TENSE\t_\t_
5\tcucinato\tcucinare\tVER\tVER\tpart+past+s+m\t0\tTOP\t_\t_
6\t.\t.\tSENT\tSENT\t_\t5\tEND\t_\t_
";

pub const COORDINATED: &str = "\
1\tMaria\tMaria\tNOUN-F\tNOUN-F\ts\t4\tSUBJ\t_\t_
2\te\te\tCON\tCON\t_\t1\tCOORD+BASE\t_\t_
3\tLuca\tLuca\tNOUN-M\tNOUN-M\ts\t2\tCOORD2ND+BASE\t_\t_
4\tcantano\tcantare\tVER\tVER\tind+pres+3+p\t0\tTOP\t_\t_
5\t.\t.\tSENT\tSENT\t_\t4\tEND\t_\t_
";

pub const CANTA: &str = "\
1\tI\til\tART-M\tART-M\tp\t3\tSUBJ\t_\t_
2\tragazzi\tragazzo\tNOUN-M\tNOUN-M\tp\t1\tARG\t_\t_
3\tcanta\tcantare\tVER\tVER\tind+pres+3+s\t0\tTOP\t_\t_
4\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

pub const DOVUTA: &str = "\
1\tMaria\tMaria\tNOUN-F\tNOUN-F\ts\t3\tSUBJ\t_\t_
2\tha\tavere\tAUX\tAUX\tind+pres+3+s\t3\tAUX+TENSE\t_\t_
3\tdovuta\tdovere\tMOD\tMOD\tpart+past+s+f\t0\tTOP\t_\t_
4\tandare\tandare\tVER\tVER\tinf+pres\t3\tARG\t_\t_
5\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

pub const DOVUTO: &str = "\
1\tMaria\tMaria\tNOUN-F\tNOUN-F\ts\t3\tSUBJ\t_\t_
2\tha\tavere\tAUX\tAUX\tind+pres+3+s\t3\tAUX+TENSE\t_\t_
3\tdovuto\tdovere\tMOD\tMOD\tpart+past+s+m\t0\tTOP\t_\t_
4\tandare\tandare\tVER\tVER\tinf+pres\t3\tARG\t_\t_
5\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

pub const LE_HO_DOVUTE: &str = "\
1\tLe\t{1=il, 2=la}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=p, 2=_}\t3\tOBJ\t_\t_
2\tho\tavere\tAUX\tAUX\tind+pres+1+s\t3\tAUX+TENSE\t_\t_
3\tdovute\tdovere\tMOD\tMOD\tpart+past+p+f\t0\tTOP\t_\t_
4\tcomprare\tcomprare\tVER\tVER\tinf+pres\t3\tARG\t_\t_
5\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

pub const LE_HO_DOVUTO: &str = "\
1\tLe\t{1=il, 2=la}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=ART-F, 2=PRO-PERS-CLI-3-F-P}\t{1=p, 2=_}\t3\tOBJ\t_\t_
2\tho\tavere\tAUX\tAUX\tind+pres+1+s\t3\tAUX+TENSE\t_\t_
3\tdovuto\tdovere\tMOD\tMOD\tpart+past+s+m\t0\tTOP\t_\t_
4\tcomprare\tcomprare\tVER\tVER\tinf+pres\t3\tARG\t_\t_
5\t.\t.\tSENT\tSENT\t_\t3\tEND\t_\t_
";

pub fn sentence(conll: &str) -> Sentence {
    let mut sentences = read_corpus(conll).unwrap();
    assert_eq!(sentences.len(), 1);
    sentences.remove(0)
}

pub fn lexicon() -> LexiconSynthesizer {
    LexiconSynthesizer::from_entries([
        LexEntry::new("comprato", "comprare", "VER:part+past+s+m"),
        LexEntry::new("comprata", "comprare", "VER:part+past+s+f"),
        LexEntry::new("comprati", "comprare", "VER:part+past+p+m"),
        LexEntry::new("comprate", "comprare", "VER:part+past+p+f"),
        LexEntry::new("cucinato", "cucinare", "VER:part+past+s+m"),
        LexEntry::new("cucinata", "cucinare", "VER:part+past+s+f"),
        LexEntry::new("cucinati", "cucinare", "VER:part+past+p+m"),
        LexEntry::new("cucinate", "cucinare", "VER:part+past+p+f"),
        LexEntry::new("dovuto", "dovere", "MOD:part+past+s+m"),
        LexEntry::new("dovuta", "dovere", "MOD:part+past+s+f"),
        LexEntry::new("dovuti", "dovere", "MOD:part+past+p+m"),
        LexEntry::new("dovute", "dovere", "MOD:part+past+p+f"),
        LexEntry::new("canta", "cantare", "VER:ind+pres+3+s"),
        LexEntry::new("cantano", "cantare", "VER:ind+pres+3+p"),
    ])
}

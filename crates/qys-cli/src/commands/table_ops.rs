use qys_core::{transcribe, Initial, Rhyme, Row, SyllableProfile, Tone};

/// One line of the reference grid: a rhyme and its open/closed spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub rhyme: Rhyme,
    pub open: String,
    pub closed: String,
    pub open_a: String,
}

pub fn table_rows(initial: Initial, tone: Tone, row: Option<Row>) -> Vec<TableRow> {
    Rhyme::ALL
        .iter()
        .map(|&rhyme| {
            let base = SyllableProfile {
                row,
                ..SyllableProfile::new(initial, rhyme, tone)
            };
            TableRow {
                rhyme,
                open: transcribe(&base),
                closed: transcribe(&base.closed()),
                open_a: transcribe(&base.chongniu_a()),
            }
        })
        .collect()
}

pub fn table_cmd(initial: Initial, tone: Tone, row: Option<Row>) {
    println!("rhyme\topen\tclosed\topen (A)");
    for r in table_rows(initial, tone, row) {
        println!("{}\t{}\t{}\t{}", r.rhyme, r.open, r.closed, r.open_a);
    }
}

// A record for sequences: the header (the text after the '>' marker) and one raw sequence line.
// Records are not merged across lines, so a wrapped FastA entry yields one record per line, all
// sharing the same header.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: &str, sequence: &str) -> Self {
        SeqRecord {
            header: header.to_string(),
            sequence: sequence.to_string(),
        }
    }

    /// Number of symbols (chars) in the sequence, i.e. the number of loci it contributes to.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }
}

//! Form double that records every write

use safe_paste_parser::parser::{FormField, FormTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormWrite {
    Reset,
    Text(FormField, String),
    ChainId(u64),
}

#[derive(Debug, Default)]
pub struct RecordingForm {
    pub writes: Vec<FormWrite>,
}

impl RecordingForm {
    pub fn text_writes(&self) -> Vec<(FormField, &str)> {
        self.writes
            .iter()
            .filter_map(|write| match write {
                FormWrite::Text(field, value) => Some((*field, value.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl FormTarget for RecordingForm {
    fn reset_preserving_selection(&mut self) {
        self.writes.push(FormWrite::Reset);
    }

    fn set_text(&mut self, field: FormField, value: &str) {
        self.writes.push(FormWrite::Text(field, value.to_string()));
    }

    fn set_chain_id(&mut self, chain_id: u64) {
        self.writes.push(FormWrite::ChainId(chain_id));
    }
}

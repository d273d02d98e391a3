use crate::country::CountryCode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum SelectionIntent {
    Select(CountryCode),
}

impl Intent for SelectionIntent {}

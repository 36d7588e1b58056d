use crate::define_record;

/// A clan.
#[derive(Debug, Clone, Default)]
pub struct ClassData {
    id: String,
    title_key: String,
}

define_record!(ClassData, "ClassData", {
    id: String,
    title_key: String,
});

impl ClassData {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title_key(&self) -> &str {
        &self.title_key
    }
}

use crate::builder::{BuildContext, BuildError, EntityBuilder};
use crate::data::ClassData;
use crate::record::{blank, inject};

#[derive(Debug, Clone, Default)]
pub struct ClassDataBuilder {
    pub class_id: String,
    pub title_key: String,
}

impl EntityBuilder for ClassDataBuilder {
    type Output = ClassData;

    fn build(&self, _ctx: &BuildContext<'_>) -> Result<ClassData, BuildError> {
        let mut class = blank::<ClassData>();
        inject(&mut class, "id", self.class_id.clone())?;
        inject(&mut class, "title_key", self.title_key.clone())?;
        Ok(class)
    }
}

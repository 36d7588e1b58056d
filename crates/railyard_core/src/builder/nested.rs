use crate::builder::{BuildContext, BuildError, EntityBuilder};
use std::fmt;

/// A list of child entities, some already built and some still pending.
///
/// Resolution yields the pre-built items first, in the order they were
/// pushed, followed by the outputs of the pending builders in order.
pub struct Nested<B: EntityBuilder> {
    built: Vec<B::Output>,
    builders: Vec<B>,
}

impl<B: EntityBuilder> Nested<B> {
    pub fn new() -> Self {
        Self {
            built: Vec::new(),
            builders: Vec::new(),
        }
    }

    pub fn push_builder(&mut self, builder: B) -> &mut Self {
        self.builders.push(builder);
        self
    }

    pub fn push_built(&mut self, item: B::Output) -> &mut Self {
        self.built.push(item);
        self
    }

    pub fn builders(&self) -> &[B] {
        &self.builders
    }

    pub fn built(&self) -> &[B::Output] {
        &self.built
    }

    pub fn len(&self) -> usize {
        self.built.len() + self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.built.is_empty() && self.builders.is_empty()
    }
}

impl<B> Nested<B>
where
    B: EntityBuilder,
    B::Output: Clone,
{
    pub fn resolve(&self, ctx: &BuildContext<'_>) -> Result<Vec<B::Output>, BuildError> {
        self.resolve_with(ctx, std::iter::empty())
    }

    /// Resolve, then build `extra` after the pending builders.
    ///
    /// Used for children derived from the parent's own fields.
    pub fn resolve_with<I>(
        &self,
        ctx: &BuildContext<'_>,
        extra: I,
    ) -> Result<Vec<B::Output>, BuildError>
    where
        I: IntoIterator<Item = B>,
    {
        let mut resolved = Vec::with_capacity(self.len());
        resolved.extend(self.built.iter().cloned());
        for builder in &self.builders {
            resolved.push(builder.build(ctx)?);
        }
        for builder in extra {
            resolved.push(builder.build(ctx)?);
        }
        Ok(resolved)
    }
}

impl<B: EntityBuilder> Default for Nested<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Clone for Nested<B>
where
    B: EntityBuilder + Clone,
    B::Output: Clone,
{
    fn clone(&self) -> Self {
        Self {
            built: self.built.clone(),
            builders: self.builders.clone(),
        }
    }
}

impl<B> fmt::Debug for Nested<B>
where
    B: EntityBuilder + fmt::Debug,
    B::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nested")
            .field("built", &self.built)
            .field("builders", &self.builders)
            .finish()
    }
}

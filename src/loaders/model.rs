//! Loaded-model boundary type.
//!
//! Parsing happens outside this crate; what arrives here is the metadata
//! the animated entities need — the model's name, its morph target names in
//! sequence order, and a display scale.

/// A model delivered by the external asset pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    /// Model name.
    pub name: String,
    /// Morph target names, in sequence order.
    pub morph_targets: Vec<String>,
    /// Uniform display scale the asset was authored for.
    pub scale: f32,
}

impl LoadedModel {
    /// Create a new loaded model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            morph_targets: Vec::new(),
            scale: 1.0,
        }
    }

    /// Attach the morph target sequence.
    pub fn with_morph_targets(mut self, targets: Vec<String>) -> Self {
        self.morph_targets = targets;
        self
    }

    /// Set the display scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Whether the model carries any morph targets.
    #[inline]
    pub fn has_morph_targets(&self) -> bool {
        !self.morph_targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let model = LoadedModel::new("moose_life")
            .with_morph_targets(vec!["gallop_000".into(), "gallop_001".into()])
            .with_scale(0.01);
        assert!(model.has_morph_targets());
        assert_eq!(model.scale, 0.01);
    }

    #[test]
    fn test_bare_model_has_no_targets() {
        assert!(!LoadedModel::new("static_prop").has_morph_targets());
    }
}

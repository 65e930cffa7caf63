//! Transform pipeline
//!
//! Chains transforms so the output of one feeds the next. Each run records
//! every intermediate text as a layer, so a caller can show how the input
//! evolved step by step.

use crate::error::Result;
use crate::transforms::{self, Transform};

/// A single layer of transformed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformLayer {
    /// The text after this transform ran
    pub text: String,

    /// Name of the transform that produced this layer
    pub transform_name: String,

    /// Additional information (e.g., parameters used)
    pub info: Vec<(String, String)>,
}

/// A pipeline of transforms applied in order
#[derive(Default, Clone)]
pub struct TextPipeline {
    transforms: Vec<Box<dyn Transform>>,
}

impl TextPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Build a pipeline from registry names, in order
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let transforms = names
            .iter()
            .map(|name| transforms::by_name(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { transforms })
    }

    /// Add a transform to the pipeline
    pub fn add_transform(mut self, transform: Box<dyn Transform>) -> Self {
        self.transforms.push(transform);
        self
    }

    /// Add multiple transforms at once
    pub fn add_transforms(mut self, transforms: Vec<Box<dyn Transform>>) -> Self {
        self.transforms.extend(transforms);
        self
    }

    /// Process text through the entire pipeline, returning all layers
    ///
    /// # Arguments
    ///
    /// * `input` - The original input text
    ///
    /// # Returns
    ///
    /// A `LayerSet` containing the original and one layer per transform
    pub fn process(&self, input: &str) -> LayerSet {
        let mut layers = LayerSet::new(input.to_string());

        for transform in &self.transforms {
            let next = transform.apply(layers.final_layer());
            tracing::trace!(
                transform = transform.name(),
                bytes = next.len(),
                "applied transform"
            );
            layers.add_layer(TransformLayer {
                text: next,
                transform_name: transform.name().to_string(),
                info: transform.metadata(),
            });
        }

        layers
    }

    /// Run the pipeline and return only the final text
    pub fn run(&self, input: &str) -> String {
        self.transforms
            .iter()
            .fold(input.to_string(), |text, transform| transform.apply(&text))
    }

    /// Get the number of transforms in the pipeline
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get the names of all transforms in the pipeline
    pub fn transform_names(&self) -> Vec<String> {
        self.transforms
            .iter()
            .map(|t| t.name().to_string())
            .collect()
    }
}

/// The original text plus every layer a pipeline run produced
#[derive(Debug, Clone)]
pub struct LayerSet {
    /// The original input text (layer 0)
    original: String,

    /// Transform layers (layer 1, 2, 3, ...)
    layers: Vec<TransformLayer>,
}

impl LayerSet {
    /// Create a new layer set with just the original text
    pub fn new(original: String) -> Self {
        Self {
            original,
            layers: Vec::new(),
        }
    }

    pub fn add_layer(&mut self, layer: TransformLayer) {
        self.layers.push(layer);
    }

    /// Get the original text
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get a specific layer by index (0 = original, 1 = first transform, etc.)
    pub fn layer(&self, index: usize) -> Option<&str> {
        if index == 0 {
            Some(&self.original)
        } else {
            self.layers.get(index - 1).map(|l| l.text.as_str())
        }
    }

    /// Get the final (most transformed) layer
    pub fn final_layer(&self) -> &str {
        self.layers
            .last()
            .map(|l| l.text.as_str())
            .unwrap_or(&self.original)
    }

    /// Get the total number of layers (including original)
    pub fn num_layers(&self) -> usize {
        self.layers.len() + 1
    }

    /// Recorded transform layers, without the original
    pub fn transform_layers(&self) -> &[TransformLayer] {
        &self.layers
    }

    /// Create an iterator over all layers (including original as layer 0)
    pub fn iter(&self) -> LayerIterator<'_> {
        LayerIterator {
            layer_set: self,
            current_index: 0,
        }
    }
}

/// Iterator over layers in a LayerSet
pub struct LayerIterator<'a> {
    layer_set: &'a LayerSet,
    current_index: usize,
}

impl<'a> Iterator for LayerIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.layer_set.layer(self.current_index);
        if result.is_some() {
            self.current_index += 1;
        }
        result
    }
}

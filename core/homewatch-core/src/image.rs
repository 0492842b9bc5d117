//! Image analysis contract and the fake analyzer.
//!
//! The coordinator only ever asks one question of a frame: "is there a cat
//! in it, at this confidence?". Production deployments would back this with
//! a vision service; that integration is out of scope here, so the shipped
//! implementation is a fake suitable for demos and tests.

use rand::Rng;

use crate::types::CameraImage;

/// Answers whether a camera frame contains a cat.
///
/// Implementations must be substitutable in tests; the coordinator treats
/// the call as a synchronous collaborator boundary.
pub trait ImageAnalyzer {
    fn contains_cat(&self, image: &CameraImage, confidence_threshold: f32) -> bool;
}

impl<T: ImageAnalyzer + ?Sized> ImageAnalyzer for Box<T> {
    fn contains_cat(&self, image: &CameraImage, confidence_threshold: f32) -> bool {
        (**self).contains_cat(image, confidence_threshold)
    }
}

/// Verdict source for the fake analyzer.
#[derive(Debug, Clone, Copy)]
enum FakeVerdict {
    Random,
    Always(bool),
}

/// A stand-in analyzer that never looks at the pixels.
///
/// Defaults to a coin flip per frame; pin the verdict with
/// [`FakeImageAnalyzer::always`] for deterministic tests and scripted
/// demos.
#[derive(Debug, Clone)]
pub struct FakeImageAnalyzer {
    verdict: FakeVerdict,
}

impl FakeImageAnalyzer {
    pub fn new() -> Self {
        FakeImageAnalyzer {
            verdict: FakeVerdict::Random,
        }
    }

    /// An analyzer that always returns `present`.
    pub fn always(present: bool) -> Self {
        FakeImageAnalyzer {
            verdict: FakeVerdict::Always(present),
        }
    }
}

impl Default for FakeImageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageAnalyzer for FakeImageAnalyzer {
    fn contains_cat(&self, _image: &CameraImage, _confidence_threshold: f32) -> bool {
        match self.verdict {
            FakeVerdict::Random => rand::thread_rng().gen_bool(0.5),
            FakeVerdict::Always(present) => present,
        }
    }
}

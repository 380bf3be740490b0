// Copyright 2025 the Lifeweeks Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::op::{DrawOp, DrawOpKind};

/// Something that can execute draw primitives: a canvas, an exporter, or a
/// recorder for tests.
pub trait DrawSurface {
    /// Executes one primitive.
    fn draw(&mut self, op: &DrawOp);

    /// Called once before a frame is replayed.
    ///
    /// The default does nothing; canvases typically clear themselves here.
    fn begin_frame(&mut self) {}
}

/// A surface that stores every primitive it receives.
///
/// It does not rasterize anything. It is meant for tests and debugging that
/// want to assert on what a frame would draw, including across several
/// frames.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    frames: usize,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives recorded since the last [`DrawSurface::begin_frame`].
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of frames started on this surface.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Number of recorded primitives of the given kind.
    #[must_use]
    pub fn count(&self, kind: DrawOpKind) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }

    /// Drops all recorded primitives but keeps the frame count.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw(&mut self, op: &DrawOp) {
        self.ops.push(op.clone());
    }

    fn begin_frame(&mut self) {
        self.ops.clear();
        self.frames += 1;
    }
}

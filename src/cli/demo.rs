//! Demo host
//!
//! A blur node with one parameter of every kind, used by the CLI.

use std::cell::Cell;
use std::rc::Rc;

use log::info;

use crate::host::LiveHost;
use crate::impl_enumerable;
use crate::live::{
    Live, LiveBool, LiveColor, LiveEnum, LiveFloat, LiveInt, LivePoint, LiveResolution, LiveSize,
};
use crate::node::Node;
use crate::types::{Color, Point, Resolution, Size};

/// Blur algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurStyle {
    Box,
    Gaussian,
    Angle,
    Zoom,
    Random,
}

impl_enumerable!(BlurStyle {
    Box = 0 => "Box",
    Gaussian = 1 => "Gaussian",
    Angle = 2 => "Angle",
    Zoom = 3 => "Zoom",
    Random = 4 => "Random",
});

/// Blur node parameters, in declaration order
#[derive(Debug)]
pub struct BlurHost {
    pub style: LiveEnum<BlurStyle>,
    pub radius: LiveFloat,
    pub quality: LiveInt,
    pub angle: LiveFloat,
    pub position: LivePoint,
    pub tint: LiveColor,
    pub extend: LiveBool,
    pub canvas_size: LiveSize,
    pub resolution: LiveResolution,
}

impl BlurHost {
    pub fn new() -> Self {
        Self {
            style: LiveEnum::new("Style", BlurStyle::Gaussian),
            radius: LiveFloat::new("Blur Radius", 0.5),
            quality: LiveInt::with_range("Quality", 4, 1..=16).updating_resolution(),
            angle: LiveFloat::with_range("Angle", 0.0, -0.5..=0.5),
            position: LivePoint::new("Position", Point::ZERO),
            tint: LiveColor::new("Tint", Color::WHITE),
            extend: LiveBool::new("Extend", false),
            canvas_size: LiveSize::new("Canvas Size", Size::new(1.0, 1.0)),
            resolution: LiveResolution::new("Resolution", Resolution::FULL_HD),
        }
    }
}

impl Default for BlurHost {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveHost for BlurHost {
    fn live_list(&self) -> Vec<&dyn Live> {
        vec![
            &self.style,
            &self.radius,
            &self.quality,
            &self.angle,
            &self.position,
            &self.tint,
            &self.extend,
            &self.canvas_size,
            &self.resolution,
        ]
    }

    fn live_list_mut(&mut self) -> Vec<&mut dyn Live> {
        vec![
            &mut self.style,
            &mut self.radius,
            &mut self.quality,
            &mut self.angle,
            &mut self.position,
            &mut self.tint,
            &mut self.extend,
            &mut self.canvas_size,
            &mut self.resolution,
        ]
    }
}

/// Node that logs and counts the signals it receives
#[derive(Debug, Default)]
pub struct LoggingNode {
    renders: Cell<u32>,
    reflows: Cell<u32>,
}

impl LoggingNode {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn renders(&self) -> u32 {
        self.renders.get()
    }

    pub fn reflows(&self) -> u32 {
        self.reflows.get()
    }
}

impl Node for LoggingNode {
    fn invalidate(&self) {
        self.renders.set(self.renders.get() + 1);
        info!("[NODE] render requested");
    }

    fn resolution_change(&self, body: &dyn Fn()) {
        self.reflows.set(self.reflows.get() + 1);
        info!("[NODE] resolution reflow");
        body();
    }
}

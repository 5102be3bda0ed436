//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PIPE: [f32; 4] = [0.13, 0.55, 0.13, 1.0];
    pub const PIPE_CAP: [f32; 4] = [0.0, 0.39, 0.0, 1.0];
    pub const BIRD_BODY: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BIRD_WING: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BIRD_BEAK: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BIRD_EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Dim layer under menu/pause/game-over overlays
    pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.45];
}

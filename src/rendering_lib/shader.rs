// src/rendering_lib/shader.rs

/// Flat-colored triangles given in pixel coordinates (origin top-left, y down).
pub const WGSL_SHADER_SOURCE: &str = r#"
struct ScreenDimensions {
    size: vec2<f32>,
    _padding: vec2<f32>,
}

@group(0) @binding(0)
var<uniform> screen: ScreenDimensions;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.color = model.color;

    // [0, width] x [0, height] with y down -> NDC with y up.
    let ndc_x = (model.position.x / (screen.size.x / 2.0)) - 1.0;
    let ndc_y = 1.0 - (model.position.y / (screen.size.y / 2.0));

    out.clip_position = vec4<f32>(ndc_x, ndc_y, 0.0, 1.0);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

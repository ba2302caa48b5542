/// DDS texture output for rasterized point buffers
use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};
use half::f16;

/// Write RGBA32F channel data as an R32G32B32A32_Float DDS texture.
pub fn write_rgba32f_texture(
    path: &str,
    width: usize,
    height: usize,
    data: &[f32],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = Vec::with_capacity(data.len() * 4);
    for &float_val in data {
        bytes.extend_from_slice(&float_val.to_le_bytes());
    }

    let params = NewDxgiParams {
        height: height as u32,
        width: width as u32,
        depth: None,
        format: DxgiFormat::R32G32B32A32_Float,
        mipmap_levels: Some(1),
        array_layers: Some(1),
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Unknown,
    };

    let mut dds = Dds::new_dxgi(params)?;
    dds.data = bytes;
    dds.write(&mut std::fs::File::create(path)?)?;
    Ok(())
}

/// Write RGBA32F channel data as a half-precision R16G16B16A16_Float DDS
/// texture. Halves the file size at the cost of coordinate precision.
pub fn write_rgba16f_texture(
    path: &str,
    width: usize,
    height: usize,
    data: &[f32],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = Vec::with_capacity(data.len() * 2);
    for &float_val in data {
        let bits = f16::from_f32(float_val).to_bits();
        bytes.extend_from_slice(&bits.to_le_bytes());
    }

    let params = NewDxgiParams {
        height: height as u32,
        width: width as u32,
        depth: None,
        format: DxgiFormat::R16G16B16A16_Float,
        mipmap_levels: Some(1),
        array_layers: Some(1),
        caps2: None,
        is_cubemap: false,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Unknown,
    };

    let mut dds = Dds::new_dxgi(params)?;
    dds.data = bytes;
    dds.write(&mut std::fs::File::create(path)?)?;
    Ok(())
}

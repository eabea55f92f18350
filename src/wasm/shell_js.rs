use crate::float_types::Real;
use crate::isosurface::{ExtractParams, IsosurfaceExtractor, ShellMesh, SignedLevelColor};
use crate::wasm::{field_js::ChargeFieldJs, js_error};
use js_sys::{Float32Array, Float64Array};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ShellMeshJs {
    inner: ShellMesh,
}

#[wasm_bindgen]
impl ShellMeshJs {
    /// Interleaved `(x, y, z)*` positions, three vertices per triangle.
    pub fn positions(&self) -> Float32Array {
        Float32Array::from(self.inner.position_buffer().as_slice())
    }

    /// Interleaved `(r, g, b)*` colors parallel to [`ShellMeshJs::positions`].
    pub fn colors(&self) -> Float32Array {
        Float32Array::from(self.inner.color_buffer().unwrap_or_default().as_slice())
    }

    /// The level of each shell, in output order.
    pub fn levels(&self) -> Float64Array {
        let levels: Vec<f64> = self.inner.shells.iter().map(|s| s.level as f64).collect();
        Float64Array::from(levels.as_slice())
    }

    #[wasm_bindgen(getter, js_name = triangleCount)]
    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }
}

/// Extract colored shells of `field` over the cube `[-extent, extent]³`.
#[wasm_bindgen(js_name = extractShells)]
pub fn extract_shells(
    field: &ChargeFieldJs,
    levels: Vec<f64>,
    grid_resolution: u32,
    extent: f64,
) -> Result<ShellMeshJs, JsValue> {
    let e = extent as Real;
    let params = ExtractParams::default()
        .with_resolution(grid_resolution as usize)
        .with_cube_bounds(-e, e);
    let levels: Vec<Real> = levels.into_iter().map(|l| l as Real).collect();

    let inner = IsosurfaceExtractor::new(params)
        .with_color(SignedLevelColor::default())
        .extract(&field.inner, &levels)
        .map_err(js_error)?;
    Ok(ShellMeshJs { inner })
}

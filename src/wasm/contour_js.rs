use crate::contour::{Contour, ContourTracer, TraceOutcome, TraceParams};
use crate::float_types::Real;
use crate::wasm::{field_js::ChargeFieldJs, js_error};
use js_sys::Float64Array;
use nalgebra::Point2;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ContourJs {
    inner: Contour,
}

#[wasm_bindgen]
impl ContourJs {
    /// Interleaved `(x, y)*` points; a closed contour repeats its first point.
    pub fn points(&self) -> Float64Array {
        let flat: Vec<f64> = self
            .inner
            .points()
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect();
        Float64Array::from(flat.as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn closed(&self) -> bool {
        self.inner.is_closed()
    }

    #[wasm_bindgen(getter, js_name = pointCount)]
    pub fn point_count(&self) -> u32 {
        self.inner.len() as u32
    }
}

/// Trace `field == level` from `(seed_x, seed_y)` on the `z = 0` plane.
///
/// Rejects with the failure message when no contour can be followed from the seed.
#[wasm_bindgen(js_name = traceContour)]
pub fn trace_contour(
    field: &ChargeFieldJs,
    level: f64,
    seed_x: f64,
    seed_y: f64,
    step_size: Option<f64>,
) -> Result<ContourJs, JsValue> {
    let mut params = TraceParams::default();
    if let Some(step) = step_size {
        params = params.with_step_size(step as Real);
    }
    let tracer = ContourTracer::new(params).map_err(js_error)?;

    match tracer.trace(
        &field.inner,
        level as Real,
        Point2::new(seed_x as Real, seed_y as Real),
    ) {
        TraceOutcome::Closed(inner) | TraceOutcome::Open(inner) => Ok(ContourJs { inner }),
        TraceOutcome::Failed(failure) => Err(js_error(failure.into())),
    }
}

use crate::field::{Charge, ChargeField, ScalarField3};
use crate::float_types::Real;
use nalgebra::Point3;
use wasm_bindgen::prelude::*;

/// A mutable set of point charges, shared by the contour and shell entry points.
#[wasm_bindgen]
pub struct ChargeFieldJs {
    pub(crate) inner: ChargeField,
}

#[wasm_bindgen]
impl ChargeFieldJs {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ChargeField::default(),
        }
    }

    #[wasm_bindgen(js_name = addCharge)]
    pub fn add_charge(&mut self, x: f64, y: f64, z: f64, magnitude: f64) -> u32 {
        self.inner.push(Charge::new(
            Point3::new(x as Real, y as Real, z as Real),
            magnitude as Real,
        ));
        (self.inner.charges().len() - 1) as u32
    }

    /// Move charge `index`; returns `false` if there is no such charge.
    #[wasm_bindgen(js_name = moveCharge)]
    pub fn move_charge(&mut self, index: u32, x: f64, y: f64, z: f64) -> bool {
        match self.inner.charges_mut().get_mut(index as usize) {
            Some(charge) => {
                charge.position = Point3::new(x as Real, y as Real, z as Real);
                true
            },
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[wasm_bindgen(getter, js_name = chargeCount)]
    pub fn charge_count(&self) -> u32 {
        self.inner.charges().len() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.scale as f64
    }

    #[wasm_bindgen(setter)]
    pub fn set_scale(&mut self, scale: f64) {
        self.inner.scale = scale as Real;
    }

    pub fn potential(&self, x: f64, y: f64, z: f64) -> f64 {
        ScalarField3::value(&self.inner, &Point3::new(x as Real, y as Real, z as Real)) as f64
    }
}

impl Default for ChargeFieldJs {
    fn default() -> Self {
        Self::new()
    }
}

//! Ecuaciones opacas `f(x) -> y`.
//!
//! El motor y la UI no inspeccionan la función: sólo la evalúan para dibujar
//! la curva o responder al deslizador. La exactitud numérica queda fuera de
//! alcance; estos constructores existen como campos opacos que los pasos
//! instalan en el modelo.

use std::fmt;
use std::rc::Rc;

/// Función de una variable con identidad estable y forma mostrable.
#[derive(Clone)]
pub struct Equation {
    id: &'static str,
    display: String,
    f: Rc<dyn Fn(f64) -> f64>,
}

impl Equation {
    pub fn new(id: &'static str, display: impl Into<String>, f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self { id,
               display: display.into(),
               f: Rc::new(f) }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Forma legible, p. ej. `rate = k·[A]`.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    /// Velocidad de una reacción de primer orden: `rate = k·[A]`.
    pub fn first_order_rate(k: f64) -> Self {
        Self::new("first_order_rate", format!("rate = {k}·[A]"), move |conc| k * conc)
    }

    /// Cociente de reacción contra la constante de equilibrio:
    /// `Q(x) = x / (1 - x)` normalizado sobre el avance de reacción.
    pub fn equilibrium_quotient(kc: f64) -> Self {
        Self::new("equilibrium_quotient",
                  format!("Q/Kc con Kc = {kc}"),
                  move |extent| (extent / (1.0 - extent)) / kc)
    }

    /// Henderson–Hasselbalch: `pH = pKa + log10([A-]/[HA])`.
    pub fn henderson_hasselbalch(pka: f64) -> Self {
        Self::new("henderson_hasselbalch",
                  format!("pH = {pka} + log₁₀([A⁻]/[HA])"),
                  move |ratio| pka + ratio.log10())
    }

    /// Conservación de masa: reactivo restante tras consumir `x` de un total.
    pub fn mass_conservation(total: f64) -> Self {
        Self::new("mass_conservation",
                  format!("restante = {total} − x"),
                  move |consumed| total - consumed)
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equation")
         .field("id", &self.id)
         .field("display", &self.display)
         .finish()
    }
}

impl PartialEq for Equation {
    /// Dos ecuaciones son la misma si comparten identidad; la función es
    /// opaca y no se compara.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_order_rate_scales_linearly() {
        let eq = Equation::first_order_rate(0.5);
        assert_eq!(eq.eval(2.0), 1.0);
        assert_eq!(eq.id(), "first_order_rate");
    }

    #[test]
    fn equality_follows_identity_not_the_closure() {
        assert_eq!(Equation::first_order_rate(0.1), Equation::first_order_rate(9.9));
        assert_ne!(Equation::first_order_rate(0.1), Equation::mass_conservation(1.0));
    }
}

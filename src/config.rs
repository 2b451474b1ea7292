//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! El ritmo de la lección (auto-avance y sub-revelados) se escala aquí para
//! poder acelerar demos o ralentizar aulas sin tocar los catálogos.
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuración global de la aplicación.
pub struct AppConfig {
    pub pacing: PacingConfig,
    /// Si los eventos de analítica se registran o se descartan.
    pub analytics_enabled: bool,
}

/// Multiplicadores de ritmo de la lección.
pub struct PacingConfig {
    /// Escala de los retardos de auto-avance (1.0 = tal cual el catálogo).
    pub auto_advance_scale: f64,
    /// Escala de los retardos de sub-revelados.
    pub reveal_scale: f64,
}

impl PacingConfig {
    pub fn auto_advance(&self, base: Duration) -> Duration {
        scale(base, self.auto_advance_scale)
    }

    pub fn reveal(&self, base: Duration) -> Duration {
        scale(base, self.reveal_scale)
    }
}

fn scale(base: Duration, factor: f64) -> Duration {
    // Factores negativos o NaN colapsan a cero en lugar de abortar.
    base.mul_f64(factor.max(0.0))
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let auto = env::var("LESSON_AUTO_ADVANCE_SCALE").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(1.0);
    let reveal = env::var("LESSON_REVEAL_SCALE").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(1.0);
    let analytics_enabled = env::var("LESSON_ANALYTICS").map(|v| v != "off").unwrap_or(true);
    AppConfig {
        pacing: PacingConfig { auto_advance_scale: auto, reveal_scale: reveal },
        analytics_enabled,
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_clamps_degenerate_factors() {
        let pacing = PacingConfig { auto_advance_scale: -2.0, reveal_scale: 0.5 };
        assert_eq!(pacing.auto_advance(Duration::from_secs(2)), Duration::ZERO);
        assert_eq!(pacing.reveal(Duration::from_secs(2)), Duration::from_secs(1));
    }
}

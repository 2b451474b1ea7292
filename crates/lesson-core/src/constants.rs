//! Constantes del motor de secuenciación.
//!
//! Agrupa valores estáticos que participan en el hash de definición de una
//! secuencia. Un cambio de versión del motor invalida de forma determinista
//! los marcadores de progreso persistidos aunque las etiquetas de los pasos
//! no cambien.

/// Versión lógica del motor. Entra en el input de `definition_hash` para que
/// una secuencia guardada bajo un motor incompatible se descarte en lugar de
/// reproducirse sobre semántica distinta.
pub const ENGINE_VERSION: &str = "L1.0";

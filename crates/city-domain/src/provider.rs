//! Trait para proveedores de datos de ciudad (adquisición).
//!
//! El proveedor es un colaborador externo: descarga o lee datasets de ciudad y
//! entrega un `CityData` ya tipado. El proceso de evaluación no conoce su
//! origen (API remota, archivo, fixture de test).
use crate::{CityData, DomainError};

pub trait CityDataProvider {
    fn name(&self) -> &str;

    /// Obtiene los datos de `city_id`. Implementaciones deberían validar el
    /// resultado antes de devolverlo; quien lo recibe vuelve a validar.
    fn fetch(&self, city_id: &str) -> Result<CityData, DomainError>;
}

impl<P: CityDataProvider + ?Sized> CityDataProvider for &P {
    fn name(&self) -> &str { (**self).name() }
    fn fetch(&self, city_id: &str) -> Result<CityData, DomainError> { (**self).fetch(city_id) }
}

//! Product catalog shown by the carousel.
//!
//! The catalog is fixed for the lifetime of the window. It is either the
//! built-in product line or a JSON array of product records loaded at startup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use raylib::prelude::*;
use serde::Deserialize;

use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub color: Color,
    pub features: Vec<String>,
}

// On-disk layout of a product; the color is kept as text until validated.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: u32,
    name: String,
    description: String,
    image: String,
    color: String,
    #[serde(default)]
    features: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The distributor's standard product line.
    pub fn builtin() -> Self {
        fn product(id: u32, name: &str, image: &str, color: Color, description: &str, features: [&str; 4]) -> Product {
            Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
                image: image.to_string(),
                color,
                features: features.iter().map(|f| f.to_string()).collect(),
            }
        }

        let products = vec![
            product(1, "Desinfetantes", "products/desinfetante-1.png", Color::new(0x8A, 0x4F, 0xFF, 255),
                "Elimina 99.9% das bactérias com fragrância duradoura.",
                ["Alta concentração", "Ação bactericida", "Fragrância duradoura", "Rendimento superior"]),
            product(2, "Detergentes", "products/detergente-1.png", Color::new(0xFF, 0x4F, 0x4F, 255),
                "Poder de limpeza superior com fórmula concentrada.",
                ["Desengraxante potente", "Biodegradável", "Múltiplas superfícies", "Econômico"]),
            product(3, "Sabonetes", "products/sabonete-1.png", Color::new(0x4F, 0xD1, 0xFF, 255),
                "Limpeza suave para as mãos com hidratação.",
                ["Hidratação profunda", "Dermatologicamente testado", "Fragrância suave", "Ação antibacteriana"]),
            product(4, "Linha Ultra", "products/linha-ultra-1.png", Color::new(0x4F, 0xFF, 0xB0, 255),
                "Produtos premium com fragrância exclusiva.",
                ["Fórmula premium", "Alta performance", "Fragrância exclusiva", "Tecnologia avançada"]),
            product(5, "Lavanderia", "products/lavanderia-1.png", Color::new(0x4F, 0x74, 0xFF, 255),
                "Soluções especializadas para lavagem de roupas.",
                ["Remove manchas difíceis", "Preserva as cores", "Perfume duradouro", "Fórmula concentrada"]),
            product(6, "Outros", "products/outros-1.png", Color::new(0xA0, 0xA0, 0xA0, 255),
                "Soluções especializadas para necessidades específicas.",
                ["Aplicações especiais", "Alta eficiência", "Soluções customizadas", "Resultados profissionais"]),
        ];

        Self { products }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        log::info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(text)?;
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut products = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            products.push(Product {
                id: record.id,
                color: parse_hex_color(&record.color)?,
                name: record.name,
                description: record.description,
                image: record.image,
                features: record.features,
            });
        }

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Parse a `#RRGGBB` accent color.
pub fn parse_hex_color(text: &str) -> Result<Color, CatalogError> {
    let invalid = || CatalogError::InvalidColor(text.to_string());

    let hex = text.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, 255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_six_unique_products() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);

        let ids: HashSet<u32> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 6);
        assert!(catalog.products().iter().all(|p| p.features.len() == 4));
    }

    #[test]
    fn parses_hex_colors() {
        let color = parse_hex_color("#8A4FFF").unwrap();
        assert_eq!((color.r, color.g, color.b, color.a), (0x8A, 0x4F, 0xFF, 255));

        let color = parse_hex_color("#4fd1ff").unwrap();
        assert_eq!((color.r, color.g, color.b), (0x4F, 0xD1, 0xFF));
    }

    #[test]
    fn rejects_malformed_colors() {
        for text in ["8A4FFF", "#8A4FF", "#8A4FFF00", "#GGGGGG", "", "#"] {
            assert!(
                matches!(parse_hex_color(text), Err(CatalogError::InvalidColor(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn loads_catalog_from_json() {
        let json = r##"[
            {"id": 7, "name": "Ceras", "description": "Brilho.", "image": "products/cera.png",
             "color": "#FFD700", "features": ["Secagem rápida", "Antiderrapante"]},
            {"id": 8, "name": "Aromatizantes", "description": "Perfume.", "image": "products/aroma.png",
             "color": "#FF88CC"}
        ]"##;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = catalog.get(0).unwrap();
        assert_eq!(first.name, "Ceras");
        assert_eq!(first.features, vec!["Secagem rápida".to_string(), "Antiderrapante".to_string()]);
        assert!(catalog.get(1).unwrap().features.is_empty());
    }

    #[test]
    fn rejects_empty_and_duplicate_catalogs() {
        assert!(matches!(Catalog::from_json_str("[]"), Err(CatalogError::Empty)));

        let json = r##"[
            {"id": 1, "name": "A", "description": "", "image": "a.png", "color": "#000000"},
            {"id": 1, "name": "B", "description": "", "image": "b.png", "color": "#FFFFFF"}
        ]"##;
        assert!(matches!(Catalog::from_json_str(json), Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[{{"id": 1, "name": "A", "description": "d", "image": "a.png", "color": "#102030"}}]"##
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().color.b, 0x30);

        let missing = Catalog::load(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(missing, Err(CatalogError::Io(_))));
    }
}

//! Brand and category: named reference entities a product points at.

use serde::{Deserialize, Serialize};

use storefront_core::{BrandId, CategoryId, DomainError, DomainResult, Entity};

/// A product brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

impl Brand {
    pub fn new(id: BrandId, name: impl Into<String>) -> DomainResult<Self> {
        let name = required_name(name.into(), "brand")?;
        Ok(Self { id, name })
    }
}

impl Entity for Brand {
    type Id = BrandId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> DomainResult<Self> {
        let name = required_name(name.into(), "category")?;
        Ok(Self { id, name })
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn required_name(name: String, what: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{what} name cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_name_is_trimmed() {
        let brand = Brand::new(BrandId::new(), "  Acme ").unwrap();
        assert_eq!(brand.name, "Acme");
    }

    #[test]
    fn blank_category_name_is_rejected() {
        let err = Category::new(CategoryId::new(), "   ").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("category")),
            _ => panic!("Expected Validation error for blank category name"),
        }
    }
}

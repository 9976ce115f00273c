//! Category Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CategoryRepositoryPort;
use crate::application::queries::ListCategories;
use crate::domain::trivia::Category;

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, _query: ListCategories) -> Result<Vec<Category>, ApplicationError> {
        Ok(self.category_repo.find_all().await?)
    }
}

// GridDB CompanyRepository Implementation

use crate::client::GridDbTransport;
use crate::condition::Condition;
use crate::container::Container;
use crate::row::{RowError, RowMapped, RowReader, RowWriter};
use crate::schema::ColumnSpec;
use crate::wire::AcquireRowsRequest;
use async_trait::async_trait;
use jobboard_core::domain::Company;
use jobboard_core::error::Result;
use jobboard_core::port::CompanyRepository;
use std::sync::Arc;

impl RowMapped for Company {
    const CONTAINER: &'static str = "JBCompany";
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::string("id").indexed(),
        ColumnSpec::string("name"),
        ColumnSpec::string("websiteUrl"),
        ColumnSpec::string("description"),
    ];

    fn write_row(&self, row: &mut RowWriter<'_>) -> Result<()> {
        row.string("id", &self.id)?
            .string("name", &self.name)?
            .string("websiteUrl", &self.website_url)?
            .string("description", &self.description)?;
        Ok(())
    }

    fn read_row(row: &mut RowReader<'_>) -> std::result::Result<Self, RowError> {
        Ok(Company {
            id: row.string("id")?,
            name: row.string("name")?,
            website_url: row.string("websiteUrl")?,
            description: row.string("description")?,
        })
    }
}

pub struct GridDbCompanyRepository {
    container: Container<Company>,
}

impl GridDbCompanyRepository {
    pub fn new(transport: Arc<dyn GridDbTransport>) -> Self {
        Self {
            container: Container::new(transport),
        }
    }

    pub fn parse_failures(&self) -> u64 {
        self.container.parse_failures()
    }
}

#[async_trait]
impl CompanyRepository for GridDbCompanyRepository {
    async fn create_table(&self) -> Result<()> {
        self.container.create_table().await
    }

    async fn save_all(&self, companies: Vec<Company>) -> Result<()> {
        self.container.save_all(&companies).await
    }

    async fn find_all(&self) -> Result<Vec<Company>> {
        self.container.find(AcquireRowsRequest::new()).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Company>> {
        self.container.find_one(Condition::eq("id", id)).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>> {
        self.container.find_one(Condition::eq("name", name)).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.container.delete(id).await
    }
}

// GridDB UserRepository Implementation

use crate::client::GridDbTransport;
use crate::condition::Condition;
use crate::container::Container;
use crate::row::{RowError, RowMapped, RowReader, RowWriter};
use crate::schema::ColumnSpec;
use crate::wire::AcquireRowsRequest;
use async_trait::async_trait;
use jobboard_core::domain::User;
use jobboard_core::error::Result;
use jobboard_core::port::UserRepository;
use std::sync::Arc;

impl RowMapped for User {
    const CONTAINER: &'static str = "JBUser";
    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec::string("id").indexed(),
        ColumnSpec::string("email").indexed(),
        ColumnSpec::string("fullName"),
        ColumnSpec::string("role"),
        ColumnSpec::string("companyId").nullable(),
    ];

    fn write_row(&self, row: &mut RowWriter<'_>) -> Result<()> {
        row.string("id", &self.id)?
            .string("email", &self.email)?
            .string("fullName", &self.full_name)?
            .enumeration("role", self.role)?
            .opt_string("companyId", self.company_id.as_deref())?;
        Ok(())
    }

    fn read_row(row: &mut RowReader<'_>) -> std::result::Result<Self, RowError> {
        Ok(User {
            id: row.string("id")?,
            email: row.string("email")?,
            full_name: row.string("fullName")?,
            role: row.enumeration("role")?,
            company_id: row.opt_string("companyId")?,
        })
    }
}

pub struct GridDbUserRepository {
    container: Container<User>,
}

impl GridDbUserRepository {
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
impl UserRepository for GridDbUserRepository {
    async fn create_table(&self) -> Result<()> {
        self.container.create_table().await
    }

    async fn save_all(&self, users: Vec<User>) -> Result<()> {
        self.container.save_all(&users).await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        self.container.find(AcquireRowsRequest::new()).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        self.container.find_one(Condition::eq("id", id)).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.container.find_one(Condition::eq("email", email)).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.container.delete(id).await
    }
}

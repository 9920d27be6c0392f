//! # Customer Handlers
//!
//! Handlers for the customer CRUD routes. Each handler runs its repository
//! calls and either renders an askama template or redirects back to the
//! list view. Storage failures surface as a fixed per-route message with a
//! 500 status; the underlying error goes to the logs.

use askama::Template;
use axum::{
    extract::{Path, RawForm, State},
    response::{Html, Redirect},
};

use crate::error::{AppError, RepositoryError};
use crate::forms::CustomerForm;
use crate::models::{company, customer, employee};
use crate::repositories::{
    CompanyRepository, CustomerRepository, CustomerUpdate, EmployeeRepository, NewCustomer,
};
use crate::server::AppState;

/// One row of the customer list view: the customer plus its company name,
/// if any.
struct CustomerRow {
    customer_id: i32,
    first_name: String,
    last_name: String,
    rating: i32,
    company_name: Option<String>,
}

/// Customer fields shown on the edit and delete views.
struct CustomerView {
    customer_id: i32,
    first_name: String,
    last_name: String,
    rating: i32,
}

/// A company selection option, with `selected` marking the customer's
/// current company on the edit form.
struct CompanyOption {
    company_id: i32,
    name: String,
    selected: bool,
}

/// An employee checkbox, with `selected` marking an existing link on the
/// edit form.
struct EmployeeOption {
    employee_id: i32,
    name: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "customers/index.html")]
struct CustomerListPage {
    customers: Vec<CustomerRow>,
}

#[derive(Template)]
#[template(path = "customers/add.html")]
struct CustomerAddPage {
    companies: Vec<CompanyOption>,
    employees: Vec<EmployeeOption>,
}

#[derive(Template)]
#[template(path = "customers/edit.html")]
struct CustomerEditPage {
    customer: CustomerView,
    companies: Vec<CompanyOption>,
    employees: Vec<EmployeeOption>,
}

#[derive(Template)]
#[template(path = "customers/delete.html")]
struct CustomerDeletePage {
    customer: CustomerView,
}

impl CustomerView {
    fn from_model(model: &customer::Model) -> Self {
        Self {
            customer_id: model.customer_id,
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            rating: model.rating,
        }
    }
}

fn company_options(companies: Vec<company::Model>, current: Option<i32>) -> Vec<CompanyOption> {
    companies
        .into_iter()
        .map(|company| CompanyOption {
            selected: current == Some(company.company_id),
            company_id: company.company_id,
            name: company.name,
        })
        .collect()
}

fn employee_options(employees: Vec<employee::Model>, linked: &[i32]) -> Vec<EmployeeOption> {
    employees
        .into_iter()
        .map(|employee| EmployeeOption {
            selected: linked.contains(&employee.employee_id),
            employee_id: employee.employee_id,
            name: format!("{} {}", employee.first_name, employee.last_name),
        })
        .collect()
}

/// Map a repository failure to the route's fixed 500 message, logging the
/// real cause.
fn storage_failure(message: &'static str) -> impl FnOnce(RepositoryError) -> AppError {
    move |error| {
        tracing::error!(error = %error, "storage operation failed");
        AppError::internal(message)
    }
}

/// GET /customers — the customer list, companies attached via left join.
pub async fn list_customers(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let repo = CustomerRepository::new(&state.db);
    let rows = repo.list_with_company().await?;

    let page = CustomerListPage {
        customers: rows
            .into_iter()
            .map(|(customer, company)| CustomerRow {
                customer_id: customer.customer_id,
                first_name: customer.first_name,
                last_name: customer.last_name,
                rating: customer.rating,
                company_name: company.map(|c| c.name),
            })
            .collect(),
    };

    Ok(Html(page.render()?))
}

/// GET /customers/create — the empty creation form with company and
/// employee selection inputs.
pub async fn create_customer_form(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let companies = CompanyRepository::new(&state.db)
        .list_all()
        .await
        .map_err(storage_failure("Error retrieving companies or employees."))?;
    let employees = EmployeeRepository::new(&state.db)
        .list_all()
        .await
        .map_err(storage_failure("Error retrieving companies or employees."))?;

    let page = CustomerAddPage {
        companies: company_options(companies, None),
        employees: employee_options(employees, &[]),
    };

    Ok(Html(page.render()?))
}

/// POST /customers/create — insert the customer and its employee links in
/// one transaction, then redirect to the list.
pub async fn create_customer(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Redirect, AppError> {
    let form =
        CustomerForm::parse(&body).map_err(|error| AppError::bad_request(error.to_string()))?;

    let repo = CustomerRepository::new(&state.db);
    let created = repo
        .create(NewCustomer {
            first_name: form.first_name,
            last_name: form.last_name,
            rating: form.rating,
            company_id: form.company_id,
            employee_ids: form.employee_ids,
        })
        .await
        .map_err(storage_failure("Error adding customer."))?;

    tracing::info!(customer_id = created.customer_id, "customer created");

    Ok(Redirect::to("/customers"))
}

/// GET /customers/{customer_id}/edit — the edit form, employee checkboxes
/// pre-ticked from the customer's current links. 404 when the customer
/// does not exist.
pub async fn edit_customer_form(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let customer_repo = CustomerRepository::new(&state.db);

    let customer = customer_repo
        .get_by_id(customer_id)
        .await
        .map_err(storage_failure("Error retrieving customer details."))?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;

    let linked = customer_repo
        .related_employee_ids(customer_id)
        .await
        .map_err(storage_failure("Error retrieving customer details."))?;
    let employees = EmployeeRepository::new(&state.db)
        .list_all()
        .await
        .map_err(storage_failure("Error retrieving customer details."))?;
    let companies = CompanyRepository::new(&state.db)
        .list_all()
        .await
        .map_err(storage_failure("Error retrieving customer details."))?;

    let page = CustomerEditPage {
        companies: company_options(companies, customer.company_id),
        employees: employee_options(employees, &linked),
        customer: CustomerView::from_model(&customer),
    };

    Ok(Html(page.render()?))
}

/// POST /customers/{customer_id}/edit — update the customer's fields and
/// redirect to the list. Employee links are not touched: the edit form
/// displays them, but editing never reconciles them.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
    RawForm(body): RawForm,
) -> Result<Redirect, AppError> {
    let form =
        CustomerForm::parse(&body).map_err(|error| AppError::bad_request(error.to_string()))?;

    let repo = CustomerRepository::new(&state.db);
    repo.update(
        customer_id,
        CustomerUpdate {
            first_name: form.first_name,
            last_name: form.last_name,
            rating: form.rating,
            company_id: form.company_id,
        },
    )
    .await?;

    Ok(Redirect::to("/customers"))
}

/// GET /customers/{customer_id}/delete — the delete confirmation view.
/// 404 when the customer does not exist.
pub async fn delete_customer_form(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let repo = CustomerRepository::new(&state.db);

    let customer = repo
        .get_by_id(customer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Customer not found"))?;

    let page = CustomerDeletePage {
        customer: CustomerView::from_model(&customer),
    };

    Ok(Html(page.render()?))
}

/// POST /customers/{customer_id}/delete — delete the customer row and
/// redirect to the list. Employee link rows referencing the customer are
/// left in place.
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Redirect, AppError> {
    let repo = CustomerRepository::new(&state.db);
    let rows_affected = repo.delete(customer_id).await?;

    if rows_affected == 0 {
        tracing::debug!(customer_id, "delete requested for missing customer");
    }

    Ok(Redirect::to("/customers"))
}

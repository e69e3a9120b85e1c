use async_trait::async_trait;
use dietplan_model::{
    form::{FieldOptions, PlanError, PlanForm},
    plan::PlanResponse,
};
use log::debug;
use reqwest::{Response, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
    #[error("{}", .0.message)]
    Validation(PlanError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn get_options(&self) -> Result<Vec<FieldOptions>>;
    async fn request_plan(&self, form: &PlanForm) -> Result<PlanResponse>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status == StatusCode::BAD_REQUEST {
        // Unrecognised bodies are plain request errors, not form errors.
        let body = resp.bytes().await.map_err(|_| Error::ResponseError)?;
        match serde_json::from_slice::<PlanError>(&body) {
            Ok(error) => Err(Error::Validation(error)),
            Err(_) => Err(Error::RequestError),
        }
    } else if status.is_client_error() {
        Err(Error::RequestError)
    } else if status.is_server_error() {
        Err(Error::InternalServerError)
    } else {
        Ok(resp)
    }
}

#[async_trait]
impl Client for ClientImpl {
    async fn get_options(&self) -> Result<Vec<FieldOptions>> {
        let resp = self
            .client
            .get(format!("{}/options", self.url))
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        check_status(resp)
            .await?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }

    async fn request_plan(&self, form: &PlanForm) -> Result<PlanResponse> {
        debug!("Posting form {:?}", form);
        let resp = self
            .client
            .post(format!("{}/plan", self.url))
            .json(form)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        check_status(resp)
            .await?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }
}

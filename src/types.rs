pub use crate::utils::database;
use async_trait::async_trait;
use lettre::{
    transport::smtp::authentication::Credentials, AsyncSmtpTransport, Tokio1Executor,
};
use std::env;

#[derive(Clone)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct MailContext {
    pub transport: AsyncSmtpTransport<Tokio1Executor>,
    pub sender: String,
    pub otp_receiver: String,
}

#[derive(Clone)]
pub struct WhatsappContext {
    pub api_url: String,
    pub phone_number_id: String,
    pub access_token: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub endpoint: String,
    pub bucket: String,
    pub api_key: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub session_secret: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub mail: MailContext,
    pub whatsapp: WhatsappContext,
    pub storage: StorageContext,
    pub auth: AuthContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct MailConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub sender: String,
    pub otp_receiver: String,
}

#[derive(Clone)]
pub struct WhatsappConfig {
    pub api_url: String,
    pub phone_number_id: String,
    pub access_token: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
    pub api_key: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub session_secret: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub mail: MailConfig,
    pub whatsapp: WhatsappConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let mail_host = env::var("SMTP_HOST").expect("SMTP_HOST not set");
        let mail_user = env::var("SMTP_USER").expect("SMTP_USER not set");
        let mail_password = env::var("SMTP_PASS").expect("SMTP_PASS not set");
        let mail_sender = env::var("MAIL_SENDER").expect("MAIL_SENDER not set");
        let mail_otp_receiver = env::var("OTP_RECEIVER_EMAIL").expect("OTP_RECEIVER_EMAIL not set");
        let whatsapp_api_url = env::var("WHATSAPP_API_URL")
            .unwrap_or_else(|_| "https://graph.facebook.com/v17.0".to_string());
        let whatsapp_phone_number_id =
            env::var("WHATSAPP_PHONE_NUMBER_ID").expect("WHATSAPP_PHONE_NUMBER_ID not set");
        let whatsapp_access_token =
            env::var("WHATSAPP_ACCESS_TOKEN").expect("WHATSAPP_ACCESS_TOKEN not set");
        let storage_endpoint = env::var("STORAGE_ENDPOINT").expect("STORAGE_ENDPOINT not set");
        let storage_bucket =
            env::var("STORAGE_RESUME_BUCKET").unwrap_or_else(|_| "resumes".to_string());
        let storage_api_key = env::var("STORAGE_API_KEY").expect("STORAGE_API_KEY not set");
        let session_secret = env::var("SESSION_SECRET").expect("SESSION_SECRET not set");

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            mail: MailConfig {
                host: mail_host,
                user: mail_user,
                password: mail_password,
                sender: mail_sender,
                otp_receiver: mail_otp_receiver,
            },
            whatsapp: WhatsappConfig {
                api_url: whatsapp_api_url,
                phone_number_id: whatsapp_phone_number_id,
                access_token: whatsapp_access_token,
            },
            storage: StorageConfig {
                endpoint: storage_endpoint,
                bucket: storage_bucket,
                api_key: storage_api_key,
            },
            auth: AuthConfig { session_secret },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.mail.host)
            .expect("Invalid mail host")
            .credentials(Credentials::new(
                self.mail.user.clone(),
                self.mail.password.clone(),
            ))
            .build();

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            mail: MailContext {
                transport,
                sender: self.mail.sender,
                otp_receiver: self.mail.otp_receiver,
            },
            whatsapp: WhatsappContext {
                api_url: self.whatsapp.api_url,
                phone_number_id: self.whatsapp.phone_number_id,
                access_token: self.whatsapp.access_token,
            },
            storage: StorageContext {
                endpoint: self.storage.endpoint,
                bucket: self.storage.bucket,
                api_key: self.storage.api_key,
            },
            auth: AuthContext {
                session_secret: self.auth.session_secret,
            },
        }
    }
}

//! S3-backed media store for property and unit images and floor plans.

mod delete;
mod exists;
mod put;

/// A bucket-scoped media store. Uploads land under a caller-chosen folder
/// tag and come back as public URLs.
#[derive(Clone, Debug)]
pub struct MediaStore {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl MediaStore {
    pub fn new(inner: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { inner, bucket }
    }

    /// Uploads `content` under `{folder}/{name}_{uuid}` and returns the
    /// public URL. The uuid suffix keeps repeated uploads of the same file
    /// name from clobbering each other.
    #[tracing::instrument(skip(self, content), fields(size = content.len()))]
    pub async fn upload(
        &self,
        folder: &str,
        name: &str,
        content_type: Option<&str>,
        content: &[u8],
    ) -> anyhow::Result<String> {
        let key = format!("{}/{}_{}", folder, name, uuid::Uuid::new_v4());
        put::put(&self.inner, &self.bucket, &key, content_type, content).await?;
        Ok(self.public_url(&key))
    }

    /// Checks if a given key exists in the bucket.
    #[tracing::instrument(skip(self))]
    pub async fn exists(&self, key: &str) -> anyhow::Result<bool> {
        exists::exists(&self.inner, &self.bucket, key).await
    }

    /// Deletes the provided key from the bucket.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> anyhow::Result<()> {
        delete::delete(&self.inner, &self.bucket, key).await
    }

    /// The public URL a key is served from.
    pub fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket, key)
    }
}

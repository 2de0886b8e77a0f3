#[tracing::instrument(skip(client))]
pub async fn delete(client: &aws_sdk_s3::Client, bucket: &str, key: &str) -> anyhow::Result<()> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;
    Ok(())
}

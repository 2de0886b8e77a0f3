#[tracing::instrument(skip(client, content))]
pub async fn put(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    content_type: Option<&str>,
    content: &[u8],
) -> anyhow::Result<()> {
    let body = aws_sdk_s3::primitives::ByteStream::from(content.to_vec());
    let mut request = client.put_object().bucket(bucket).key(key).body(body);
    if let Some(content_type) = content_type {
        request = request.content_type(content_type);
    }
    request.send().await?;
    Ok(())
}

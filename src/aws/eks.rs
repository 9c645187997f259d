use super::run::AwsCli;
use crate::error::{AliasError, AliasResult};
use log::{debug, info, warn};
use serde::Deserialize;

pub const ARN_PREFIX: &str = "arn:aws";

#[derive(Debug, Deserialize)]
struct ClusterList {
    clusters: Vec<String>,
}

/// A remote EKS cluster and the region it was listed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterRef {
    pub name: String,
    pub region: String,
}

/// Finds the context name in `aws eks update-kubeconfig` output, e.g.
/// `Updated context arn:aws:eks:us-east-1:111:cluster/b in /home/u/.kube/config`.
pub fn parse_context_arn(confirmation: &str) -> Option<&str> {
    confirmation
        .split_whitespace()
        .find(|token| token.starts_with(ARN_PREFIX))
}

impl AwsCli<'_> {
    pub fn list_clusters(&self, region: &str) -> AliasResult<Vec<String>> {
        let stdout = self.run(&["eks", "list-clusters", "--region", region])?;
        let list: ClusterList = serde_json::from_str(&stdout)?;

        debug!("found {} clusters in {region}", list.clusters.len());
        Ok(list.clusters)
    }

    /// Writes a kubeconfig entry for `cluster` and returns the resulting
    /// context name: `alias` when given, otherwise the ARN reported by the CLI.
    /// Output without an ARN yields an empty name.
    pub fn update_kubeconfig(
        &self,
        cluster: &ClusterRef,
        alias: Option<&str>,
    ) -> AliasResult<String> {
        let mut args = vec![
            "eks",
            "update-kubeconfig",
            "--region",
            cluster.region.as_str(),
            "--name",
            cluster.name.as_str(),
        ];
        if let Some(alias) = alias {
            args.extend(["--alias", alias]);
        }

        let confirmation = self.run(&args)?;

        match alias {
            Some(alias) => Ok(alias.to_string()),
            None => {
                let context = parse_context_arn(&confirmation).unwrap_or_default();
                if context.is_empty() {
                    warn!(
                        "no {ARN_PREFIX} context in update-kubeconfig output: {confirmation:?}"
                    );
                }
                Ok(context.to_string())
            }
        }
    }

    /// Region prompt, cluster pick, optional alias, then update-kubeconfig.
    /// Nothing is rolled back if a later step fails.
    pub fn link_new_context(&self) -> AliasResult<String> {
        let region = self.exec.prompt("AWS Region: ")?.trim().to_string();
        if region.is_empty() {
            return Err(AliasError::EmptyRegion);
        }

        let clusters: Vec<String> = self
            .list_clusters(&region)?
            .into_iter()
            .filter(|name| !name.is_empty())
            .collect();
        if clusters.is_empty() {
            return Err(AliasError::NoClusters { region });
        }

        let name = self.menu.select(&clusters, "Cluster")?;
        let cluster = ClusterRef { name, region };

        let alias = self
            .exec
            .prompt("Context Alias (leave blank for default): ")?
            .trim()
            .to_string();
        let alias = (!alias.is_empty()).then_some(alias.as_str());

        let context = self.update_kubeconfig(&cluster, alias)?;
        info!(
            "linked cluster {} in {} as context '{context}'",
            cluster.name, cluster.region
        );
        Ok(context)
    }
}

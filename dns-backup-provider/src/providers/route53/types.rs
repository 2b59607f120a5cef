//! Route 53 record set document format
//!
//! Backups store record sets in the PascalCase shape the Route 53 API uses
//! in JSON (`Name`, `Type`, `TTL`, `ResourceRecords`, `AliasTarget`, ...).
//! These types convert between that shape and the SDK types.
//!
//! Unknown keys are rejected rather than ignored: a stored field this mirror
//! does not know would otherwise vanish on restore.

use aws_sdk_route53::error::BuildError;
use aws_sdk_route53::types::{
    AliasTarget, CidrRoutingConfig, Coordinates, GeoLocation, GeoProximityLocation,
    ResourceRecord, ResourceRecordSet,
    ResourceRecordSetFailover, ResourceRecordSetRegion, RrType,
};
use serde::{Deserialize, Serialize};

use crate::types::RecordSet;

/// Route 53 record set as stored in a backup document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct Route53RecordSet {
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_location: Option<GeoLocationDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_proximity_location: Option<GeoProximityLocationDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_value_answer: Option<bool>,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_records: Option<Vec<ResourceRecordDoc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTargetDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_policy_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_routing_config: Option<CidrRoutingConfigDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct ResourceRecordDoc {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct AliasTargetDoc {
    pub hosted_zone_id: String,
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    pub evaluate_target_health: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct GeoLocationDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdivision_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct GeoProximityLocationDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_zone_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<CoordinatesDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<i32>,
}

/// Latitude and longitude are decimal strings, as the API sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct CoordinatesDoc {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct CidrRoutingConfigDoc {
    pub collection_id: String,
    pub location_name: String,
}

impl Route53RecordSet {
    /// Reads a stored record back into the Route 53 shape.
    pub fn from_record_set(record: &RecordSet) -> serde_json::Result<Self> {
        serde_json::from_value(record.as_value().clone())
    }

    /// Wraps this record as an opaque [`RecordSet`].
    pub fn into_record_set(self) -> serde_json::Result<RecordSet> {
        serde_json::to_value(self).map(RecordSet::new)
    }

    /// Builds the SDK record set used in change requests.
    pub fn into_sdk(self) -> Result<ResourceRecordSet, BuildError> {
        let resource_records = self
            .resource_records
            .map(|records| {
                records
                    .into_iter()
                    .map(|r| ResourceRecord::builder().value(r.value).build())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let alias_target = self
            .alias_target
            .map(|alias| {
                AliasTarget::builder()
                    .hosted_zone_id(alias.hosted_zone_id)
                    .dns_name(alias.dns_name)
                    .evaluate_target_health(alias.evaluate_target_health)
                    .build()
            })
            .transpose()?;

        let cidr_routing_config = self
            .cidr_routing_config
            .map(|cidr| {
                CidrRoutingConfig::builder()
                    .collection_id(cidr.collection_id)
                    .location_name(cidr.location_name)
                    .build()
            })
            .transpose()?;

        let geo_location = self.geo_location.map(|geo| {
            GeoLocation::builder()
                .set_continent_code(geo.continent_code)
                .set_country_code(geo.country_code)
                .set_subdivision_code(geo.subdivision_code)
                .build()
        });

        let geo_proximity_location = match self.geo_proximity_location {
            Some(geo) => {
                let coordinates = geo
                    .coordinates
                    .map(|c| {
                        Coordinates::builder()
                            .latitude(c.latitude)
                            .longitude(c.longitude)
                            .build()
                    })
                    .transpose()?;
                Some(
                    GeoProximityLocation::builder()
                        .set_aws_region(geo.aws_region)
                        .set_local_zone_group(geo.local_zone_group)
                        .set_coordinates(coordinates)
                        .set_bias(geo.bias)
                        .build(),
                )
            }
            None => None,
        };

        ResourceRecordSet::builder()
            .name(self.name)
            .r#type(RrType::from(self.record_type.as_str()))
            .set_set_identifier(self.set_identifier)
            .set_weight(self.weight)
            .set_region(self.region.as_deref().map(ResourceRecordSetRegion::from))
            .set_geo_location(geo_location)
            .set_failover(self.failover.as_deref().map(ResourceRecordSetFailover::from))
            .set_geo_proximity_location(geo_proximity_location)
            .set_multi_value_answer(self.multi_value_answer)
            .set_ttl(self.ttl)
            .set_resource_records(resource_records)
            .set_alias_target(alias_target)
            .set_health_check_id(self.health_check_id)
            .set_traffic_policy_instance_id(self.traffic_policy_instance_id)
            .set_cidr_routing_config(cidr_routing_config)
            .build()
    }
}

impl From<&ResourceRecordSet> for Route53RecordSet {
    fn from(rrs: &ResourceRecordSet) -> Self {
        Self {
            name: rrs.name.clone(),
            record_type: rrs.r#type.as_str().to_string(),
            set_identifier: rrs.set_identifier.clone(),
            weight: rrs.weight,
            region: rrs.region.as_ref().map(|r| r.as_str().to_string()),
            geo_location: rrs.geo_location.as_ref().map(|geo| GeoLocationDoc {
                continent_code: geo.continent_code.clone(),
                country_code: geo.country_code.clone(),
                subdivision_code: geo.subdivision_code.clone(),
            }),
            failover: rrs.failover.as_ref().map(|f| f.as_str().to_string()),
            geo_proximity_location: rrs.geo_proximity_location.as_ref().map(|geo| {
                GeoProximityLocationDoc {
                    aws_region: geo.aws_region.clone(),
                    local_zone_group: geo.local_zone_group.clone(),
                    coordinates: geo.coordinates.as_ref().map(|c| CoordinatesDoc {
                        latitude: c.latitude.clone(),
                        longitude: c.longitude.clone(),
                    }),
                    bias: geo.bias,
                }
            }),
            multi_value_answer: rrs.multi_value_answer,
            ttl: rrs.ttl,
            resource_records: rrs.resource_records.as_ref().map(|records| {
                records
                    .iter()
                    .map(|r| ResourceRecordDoc {
                        value: r.value.clone(),
                    })
                    .collect()
            }),
            alias_target: rrs.alias_target.as_ref().map(|alias| AliasTargetDoc {
                hosted_zone_id: alias.hosted_zone_id.clone(),
                dns_name: alias.dns_name.clone(),
                evaluate_target_health: alias.evaluate_target_health,
            }),
            health_check_id: rrs.health_check_id.clone(),
            traffic_policy_instance_id: rrs.traffic_policy_instance_id.clone(),
            cidr_routing_config: rrs
                .cidr_routing_config
                .as_ref()
                .map(|cidr| CidrRoutingConfigDoc {
                    collection_id: cidr.collection_id.clone(),
                    location_name: cidr.location_name.clone(),
                }),
        }
    }
}
